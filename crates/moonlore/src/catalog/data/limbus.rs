//! Limbus Company tables: sinners with their identities, E.G.O., and the
//! Mirror Dungeon guide.

use crate::domain::entities::{Ego, GiftBuild, Identity, MirrorFloor, Sinner};
use crate::domain::value_objects::AttackType::{Blunt, Pierce, Slash};
use crate::domain::value_objects::Sin::{Envy, Gloom, Gluttony, Lust, Pride, Sloth, Wrath};
use crate::domain::value_objects::{Grade, Tier};

pub(crate) fn sinners() -> Vec<Sinner> {
    vec![
        Sinner {
            id: "yi-sang",
            name: "Yi Sang",
            number: 1,
            quote: "The wings that were once broken can no longer fly.",
            base_identity: "LCB Sinner",
            identities: vec![
                Identity {
                    id: "yi-sang-lcb",
                    name: "LCB Sinner Yi Sang",
                    sinner_id: "yi-sang",
                    rarity: 1,
                    affiliation: "Limbus Company",
                    attack_type: Slash,
                    defense_type: Slash,
                    sin_affinity: vec![Gloom],
                    tier: Tier::C,
                    tags: vec!["starter", "gloom"],
                },
                Identity {
                    id: "yi-sang-blade-lineage",
                    name: "Blade Lineage Salsu Yi Sang",
                    sinner_id: "yi-sang",
                    rarity: 3,
                    affiliation: "Blade Lineage",
                    attack_type: Slash,
                    defense_type: Slash,
                    sin_affinity: vec![Gloom, Lust],
                    tier: Tier::S,
                    tags: vec!["blade", "counter", "gloom", "dps"],
                },
                Identity {
                    id: "yi-sang-efflux",
                    name: "Effloresced E.G.O::Spicebush Yi Sang",
                    sinner_id: "yi-sang",
                    rarity: 3,
                    affiliation: "E.G.O",
                    attack_type: Slash,
                    defense_type: Pierce,
                    sin_affinity: vec![Gloom, Wrath],
                    tier: Tier::A,
                    tags: vec!["ego", "aoe", "gloom"],
                },
            ],
        },
        Sinner {
            id: "faust",
            name: "Faust",
            number: 2,
            quote: "Knowledge is power, but power corrupts.",
            base_identity: "LCB Sinner",
            identities: vec![
                Identity {
                    id: "faust-lcb",
                    name: "LCB Sinner Faust",
                    sinner_id: "faust",
                    rarity: 1,
                    affiliation: "Limbus Company",
                    attack_type: Pierce,
                    defense_type: Pierce,
                    sin_affinity: vec![Pride],
                    tier: Tier::C,
                    tags: vec!["starter", "pride"],
                },
                Identity {
                    id: "faust-seven",
                    name: "Seven Association South Section 6 Faust",
                    sinner_id: "faust",
                    rarity: 3,
                    affiliation: "Seven Association",
                    attack_type: Pierce,
                    defense_type: Pierce,
                    sin_affinity: vec![Pride, Gluttony],
                    tier: Tier::S,
                    tags: vec!["seven", "rupture", "support"],
                },
            ],
        },
        Sinner {
            id: "don-quixote",
            name: "Don Quixote",
            number: 3,
            quote: "I am a knight! A true knight fights for justice!",
            base_identity: "LCB Sinner",
            identities: vec![
                Identity {
                    id: "don-lcb",
                    name: "LCB Sinner Don Quixote",
                    sinner_id: "don-quixote",
                    rarity: 1,
                    affiliation: "Limbus Company",
                    attack_type: Pierce,
                    defense_type: Pierce,
                    sin_affinity: vec![Lust],
                    tier: Tier::C,
                    tags: vec!["starter", "lust"],
                },
                Identity {
                    id: "don-wcrp",
                    name: "W Corp. L3 Cleanup Agent Don Quixote",
                    sinner_id: "don-quixote",
                    rarity: 3,
                    affiliation: "W Corp.",
                    attack_type: Pierce,
                    defense_type: Pierce,
                    sin_affinity: vec![Lust, Pride],
                    tier: Tier::S,
                    tags: vec!["charge", "dps", "self-damage"],
                },
            ],
        },
        Sinner {
            id: "ryoshu",
            name: "Ryōshū",
            number: 4,
            quote: "Art is explosion... and so is battle.",
            base_identity: "LCB Sinner",
            identities: vec![Identity {
                id: "ryoshu-lcb",
                name: "LCB Sinner Ryōshū",
                sinner_id: "ryoshu",
                rarity: 1,
                affiliation: "Limbus Company",
                attack_type: Slash,
                defense_type: Slash,
                sin_affinity: vec![Wrath],
                tier: Tier::C,
                tags: vec!["starter", "wrath"],
            }],
        },
        Sinner {
            id: "meursault",
            name: "Meursault",
            number: 5,
            quote: "I simply exist. Nothing more.",
            base_identity: "LCB Sinner",
            identities: vec![Identity {
                id: "meursault-lcb",
                name: "LCB Sinner Meursault",
                sinner_id: "meursault",
                rarity: 1,
                affiliation: "Limbus Company",
                attack_type: Blunt,
                defense_type: Blunt,
                sin_affinity: vec![Sloth],
                tier: Tier::C,
                tags: vec!["starter", "sloth", "tank"],
            }],
        },
        Sinner {
            id: "hong-lu",
            name: "Hong Lu",
            number: 6,
            quote: "Haha, this is getting interesting!",
            base_identity: "LCB Sinner",
            identities: vec![Identity {
                id: "hong-lu-lcb",
                name: "LCB Sinner Hong Lu",
                sinner_id: "hong-lu",
                rarity: 1,
                affiliation: "Limbus Company",
                attack_type: Blunt,
                defense_type: Slash,
                sin_affinity: vec![Gluttony],
                tier: Tier::C,
                tags: vec!["starter", "gluttony"],
            }],
        },
        Sinner {
            id: "heathcliff",
            name: "Heathcliff",
            number: 7,
            quote: "Revenge... it burns within me.",
            base_identity: "LCB Sinner",
            identities: vec![Identity {
                id: "heathcliff-lcb",
                name: "LCB Sinner Heathcliff",
                sinner_id: "heathcliff",
                rarity: 1,
                affiliation: "Limbus Company",
                attack_type: Blunt,
                defense_type: Blunt,
                sin_affinity: vec![Wrath],
                tier: Tier::C,
                tags: vec!["starter", "wrath"],
            }],
        },
        Sinner {
            id: "ishmael",
            name: "Ishmael",
            number: 8,
            quote: "The sea calls to me... or is it vengeance?",
            base_identity: "LCB Sinner",
            identities: vec![Identity {
                id: "ishmael-lcb",
                name: "LCB Sinner Ishmael",
                sinner_id: "ishmael",
                rarity: 1,
                affiliation: "Limbus Company",
                attack_type: Slash,
                defense_type: Slash,
                sin_affinity: vec![Envy],
                tier: Tier::C,
                tags: vec!["starter", "envy"],
            }],
        },
        Sinner {
            id: "rodion",
            name: "Rodion",
            number: 9,
            quote: "I have to make amends... somehow.",
            base_identity: "LCB Sinner",
            identities: vec![Identity {
                id: "rodion-lcb",
                name: "LCB Sinner Rodion",
                sinner_id: "rodion",
                rarity: 1,
                affiliation: "Limbus Company",
                attack_type: Blunt,
                defense_type: Blunt,
                sin_affinity: vec![Wrath],
                tier: Tier::C,
                tags: vec!["starter", "wrath"],
            }],
        },
        Sinner {
            id: "sinclair",
            name: "Sinclair",
            number: 10,
            quote: "I... I just want to help.",
            base_identity: "LCB Sinner",
            identities: vec![Identity {
                id: "sinclair-lcb",
                name: "LCB Sinner Sinclair",
                sinner_id: "sinclair",
                rarity: 1,
                affiliation: "Limbus Company",
                attack_type: Slash,
                defense_type: Slash,
                sin_affinity: vec![Envy],
                tier: Tier::C,
                tags: vec!["starter", "envy"],
            }],
        },
        Sinner {
            id: "outis",
            name: "Outis",
            number: 11,
            quote: "Orders are orders. I follow them.",
            base_identity: "LCB Sinner",
            identities: vec![Identity {
                id: "outis-lcb",
                name: "LCB Sinner Outis",
                sinner_id: "outis",
                rarity: 1,
                affiliation: "Limbus Company",
                attack_type: Pierce,
                defense_type: Pierce,
                sin_affinity: vec![Pride],
                tier: Tier::C,
                tags: vec!["starter", "pride"],
            }],
        },
        Sinner {
            id: "gregor",
            name: "Gregor",
            number: 12,
            quote: "Family... I must protect my family.",
            base_identity: "LCB Sinner",
            identities: vec![Identity {
                id: "gregor-lcb",
                name: "LCB Sinner Gregor",
                sinner_id: "gregor",
                rarity: 1,
                affiliation: "Limbus Company",
                attack_type: Blunt,
                defense_type: Blunt,
                sin_affinity: vec![Gloom],
                tier: Tier::C,
                tags: vec!["starter", "gloom", "tank"],
            }],
        },
    ]
}

pub(crate) fn egos() -> Vec<Ego> {
    vec![
        Ego {
            id: "yi-sang-crow-feather",
            name: "4th Match Flame",
            sinner_id: "yi-sang",
            sinner_name: "Yi Sang",
            grade: Grade::He,
            attack_type: Slash,
            sin_cost: vec![(Gloom, 3), (Sloth, 2)],
            abnormality: "The Little Match Girl",
            tier: Tier::A,
            tags: vec!["burn", "aoe"],
        },
        Ego {
            id: "yi-sang-sunshower",
            name: "Sunshower",
            sinner_id: "yi-sang",
            sinner_name: "Yi Sang",
            grade: Grade::Waw,
            attack_type: Slash,
            sin_cost: vec![(Gloom, 4), (Lust, 3), (Sloth, 2)],
            abnormality: "Sunshower",
            tier: Tier::S,
            tags: vec!["gloom", "tremor", "utility"],
        },
        Ego {
            id: "faust-representation",
            name: "Representation Emitter",
            sinner_id: "faust",
            sinner_name: "Faust",
            grade: Grade::Teth,
            attack_type: Pierce,
            sin_cost: vec![(Pride, 2)],
            abnormality: "Nothing There",
            tier: Tier::B,
            tags: vec!["rupture", "support"],
        },
        Ego {
            id: "faust-fluid-sac",
            name: "Fluid Sac",
            sinner_id: "faust",
            sinner_name: "Faust",
            grade: Grade::He,
            attack_type: Blunt,
            sin_cost: vec![(Gluttony, 3), (Sloth, 2)],
            abnormality: "Melting Love",
            tier: Tier::A,
            tags: vec!["heal", "utility"],
        },
        Ego {
            id: "don-hurricane",
            name: "La Sangre de Sancho",
            sinner_id: "don-quixote",
            sinner_name: "Don Quixote",
            grade: Grade::He,
            attack_type: Pierce,
            sin_cost: vec![(Lust, 3), (Wrath, 2)],
            abnormality: "Bloodbath",
            tier: Tier::S,
            tags: vec!["bleed", "dps"],
        },
        Ego {
            id: "don-lantern",
            name: "Holiday",
            sinner_id: "don-quixote",
            sinner_name: "Don Quixote",
            grade: Grade::Waw,
            attack_type: Blunt,
            sin_cost: vec![(Pride, 4), (Gloom, 3)],
            abnormality: "Big and Will be Bad Wolf",
            tier: Tier::A,
            tags: vec!["aoe", "charge"],
        },
        Ego {
            id: "ryoshu-forest",
            name: "Forest for the Flames",
            sinner_id: "ryoshu",
            sinner_name: "Ryōshū",
            grade: Grade::He,
            attack_type: Slash,
            sin_cost: vec![(Wrath, 3), (Gloom, 2)],
            abnormality: "Scorched Girl",
            tier: Tier::S,
            tags: vec!["burn", "dps"],
        },
        Ego {
            id: "meursault-penitence",
            name: "Penitence",
            sinner_id: "meursault",
            sinner_name: "Meursault",
            grade: Grade::He,
            attack_type: Blunt,
            sin_cost: vec![(Sloth, 3), (Gloom, 2)],
            abnormality: "Punishing Bird",
            tier: Tier::A,
            tags: vec!["tank", "counter"],
        },
        Ego {
            id: "hong-lu-dimension",
            name: "Dimension Shredder",
            sinner_id: "hong-lu",
            sinner_name: "Hong Lu",
            grade: Grade::He,
            attack_type: Slash,
            sin_cost: vec![(Gluttony, 3), (Pride, 2)],
            abnormality: "Dimensional Refraction Variant",
            tier: Tier::A,
            tags: vec!["slash", "dps"],
        },
        Ego {
            id: "heathcliff-bodysack",
            name: "Bodysack",
            sinner_id: "heathcliff",
            sinner_name: "Heathcliff",
            grade: Grade::Teth,
            attack_type: Blunt,
            sin_cost: vec![(Wrath, 2), (Envy, 1)],
            abnormality: "Schadenfreude",
            tier: Tier::B,
            tags: vec!["tank"],
        },
        Ego {
            id: "ishmael-blind-obsession",
            name: "Blind Obsession",
            sinner_id: "ishmael",
            sinner_name: "Ishmael",
            grade: Grade::He,
            attack_type: Pierce,
            sin_cost: vec![(Envy, 3), (Wrath, 2)],
            abnormality: "Schadenfreude",
            tier: Tier::A,
            tags: vec!["poise", "dps"],
        },
        Ego {
            id: "rodion-pursuance",
            name: "Pursuance",
            sinner_id: "rodion",
            sinner_name: "Rodion",
            grade: Grade::He,
            attack_type: Blunt,
            sin_cost: vec![(Wrath, 3), (Lust, 2)],
            abnormality: "Red Shoes",
            tier: Tier::A,
            tags: vec!["bleed", "aoe"],
        },
        Ego {
            id: "sinclair-sunshaker",
            name: "Sunshaker",
            sinner_id: "sinclair",
            sinner_name: "Sinclair",
            grade: Grade::He,
            attack_type: Slash,
            sin_cost: vec![(Envy, 3), (Sloth, 2)],
            abnormality: "Funeral of the Dead Butterflies",
            tier: Tier::B,
            tags: vec!["tremor"],
        },
        Ego {
            id: "outis-magic-bullet",
            name: "Magic Bullet",
            sinner_id: "outis",
            sinner_name: "Outis",
            grade: Grade::He,
            attack_type: Pierce,
            sin_cost: vec![(Pride, 3), (Gluttony, 2)],
            abnormality: "Der Freischütz",
            tier: Tier::A,
            tags: vec!["rupture", "pierce"],
        },
        Ego {
            id: "gregor-legerdemain",
            name: "Legerdemain",
            sinner_id: "gregor",
            sinner_name: "Gregor",
            grade: Grade::Teth,
            attack_type: Blunt,
            sin_cost: vec![(Gloom, 2), (Sloth, 1)],
            abnormality: "Laetitia",
            tier: Tier::B,
            tags: vec!["tank", "support"],
        },
    ]
}

pub(crate) fn mirror_floors() -> Vec<MirrorFloor> {
    vec![
        MirrorFloor {
            name: "Floor 1 - The Beginning",
            difficulty: "Easy",
            tips: vec![
                "Build your sin resources",
                "Pick up cheap E.G.O. gifts",
                "Focus on consistent damage",
            ],
            recommended_gifts: vec!["Burn synergy", "Bleed synergy", "Raw damage increase"],
        },
        MirrorFloor {
            name: "Floor 2 - The Escalation",
            difficulty: "Medium",
            tips: vec![
                "Start specializing your build",
                "Avoid spreading resources too thin",
                "Consider team composition",
            ],
            recommended_gifts: vec!["Status effect amplifiers", "Sin generation", "Defense boosts"],
        },
        MirrorFloor {
            name: "Floor 3 - The Challenge",
            difficulty: "Hard",
            tips: vec![
                "Commit to your build path",
                "Synergy is key",
                "Save E.G.O. for crucial moments",
            ],
            recommended_gifts: vec![
                "Legendary synergy items",
                "Team-wide buffs",
                "Boss-specific counters",
            ],
        },
        MirrorFloor {
            name: "Floor 4 - The Climax",
            difficulty: "Very Hard",
            tips: vec![
                "Use all resources",
                "Execute your strategy perfectly",
                "Know boss patterns",
            ],
            recommended_gifts: vec![
                "Ultimate synergy completers",
                "Survival items",
                "Burst damage",
            ],
        },
    ]
}

pub(crate) fn gift_builds() -> Vec<GiftBuild> {
    vec![
        GiftBuild {
            name: "Burn Build",
            tier: Tier::S,
            description: "Stack burn damage for explosive DPS. Works with Ryōshū, Heathcliff.",
        },
        GiftBuild {
            name: "Bleed Build",
            tier: Tier::S,
            description: "Consistent damage over time. Perfect for Don Quixote, Rodion.",
        },
        GiftBuild {
            name: "Rupture Build",
            tier: Tier::A,
            description: "High burst potential. Synergizes with Faust, Outis.",
        },
        GiftBuild {
            name: "Tremor Build",
            tier: Tier::A,
            description: "Crowd control focused. Works well with Yi Sang.",
        },
        GiftBuild {
            name: "Poise Build",
            tier: Tier::B,
            description: "Critical hit focused. Good with Ishmael, Hong Lu.",
        },
        GiftBuild {
            name: "Charge Build",
            tier: Tier::B,
            description: "High risk, high reward. Specialized for Don Quixote.",
        },
    ]
}
