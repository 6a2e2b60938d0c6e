//! Lobotomy Corporation tables: abnormalities and sephirahs.
//!
//! Abnormality prose carries both locales; sephirah records are
//! English-only, matching what the site localized.

use crate::domain::entities::{Abnormality, Sephirah, WorkPreference};
use crate::domain::value_objects::WorkAffinity::{Bad, Best, Good, Normal};
use crate::domain::value_objects::{DamageType, Grade, LocalizedText};

pub(crate) fn abnormalities() -> Vec<Abnormality> {
    vec![
        Abnormality {
            id: "one-sin",
            name: LocalizedText::new("One Sin and Hundreds of Good Deeds", "一罪与百善"),
            code: "O-03-03",
            risk_level: Grade::Zayin,
            description: LocalizedText::new(
                "A girl who waits. She always seems to be on the verge of tears.",
                "一个等待着的女孩。她似乎总是处于泪水的边缘。",
            ),
            portrait: "😢",
            pe_info: LocalizedText::new(
                "Produces good energy with attachment work. Low risk for new employees.",
                "依恋工作可产出良好的能量。对新员工而言风险较低。",
            ),
            max_energy: 8,
            breach_condition: Some("Work counter reaches 0 (66.6 seconds countdown)"),
            work_preference: WorkPreference {
                instinct: Normal,
                insight: Bad,
                attachment: Best,
                repression: Normal,
            },
            special_notes: vec![
                "Countdown starts when not worked on",
                "Breaching causes massive damage to all employees",
                "Keep working on her regularly",
            ],
            damage_type: DamageType::Red,
            encode_value: 12,
        },
        Abnormality {
            id: "scorched-girl",
            name: LocalizedText::new("Scorched Girl", "烧焦的少女"),
            code: "F-01-02",
            risk_level: Grade::Teth,
            description: LocalizedText::new(
                "A small girl engulfed in flames. She yearns for something that was taken from her.",
                "一个被火焰吞噬的小女孩。她渴望着被夺走的东西。",
            ),
            portrait: "🔥",
            pe_info: LocalizedText::new(
                "Prone to escaping if work result is bad. Moderate energy output.",
                "工作结果不佳时容易出逃。能量产出中等。",
            ),
            max_energy: 14,
            breach_condition: Some("Bad work result, or QliphothCounter reaches 0"),
            work_preference: WorkPreference {
                instinct: Good,
                insight: Normal,
                attachment: Bad,
                repression: Good,
            },
            special_notes: vec![
                "Can set employees on fire during breach",
                "Fire spreads to nearby employees",
                "Suppression priority: High",
            ],
            damage_type: DamageType::Red,
            encode_value: 18,
        },
        Abnormality {
            id: "beauty-and-beast",
            name: LocalizedText::new("Beauty and the Beast", "美女与野兽"),
            code: "F-02-44",
            risk_level: Grade::He,
            description: LocalizedText::new(
                "A tragic romance preserved forever. One cannot exist without the other.",
                "一段被永远封存的悲剧恋情。二者缺一不可。",
            ),
            portrait: "🌹",
            pe_info: LocalizedText::new(
                "Moderate risk. The rose must never wilt.",
                "风险中等。玫瑰绝不能枯萎。",
            ),
            max_energy: 20,
            breach_condition: Some("Bad work results multiple times"),
            work_preference: WorkPreference {
                instinct: Bad,
                insight: Good,
                attachment: Best,
                repression: Normal,
            },
            special_notes: vec![
                "Two entities - handle with care",
                "Beast awakens if rose is threatened",
                "High damage output during breach",
            ],
            damage_type: DamageType::Red,
            encode_value: 24,
        },
        Abnormality {
            id: "nothing-there",
            name: LocalizedText::new("Nothing There", "一无所有"),
            code: "O-06-20",
            risk_level: Grade::Aleph,
            description: LocalizedText::new(
                "It looks like nothing. It looks like everything. It is always watching.",
                "它看起来什么都不是，又什么都像。它一直在注视着。",
            ),
            portrait: "👁️",
            pe_info: LocalizedText::new(
                "One of the most dangerous abnormalities. Handle with extreme caution.",
                "最危险的异想体之一。务必极度谨慎地对待。",
            ),
            max_energy: 44,
            breach_condition: Some("Poor work results or Qliphoth Counter depletes"),
            work_preference: WorkPreference {
                instinct: Good,
                insight: Normal,
                attachment: Good,
                repression: Bad,
            },
            special_notes: vec![
                "Can mimic dead employees",
                "Extremely high combat stats",
                "Requires level 5 agents for safe work",
                "E.G.O weapon: Mimicry",
            ],
            damage_type: DamageType::Red,
            encode_value: 60,
        },
        Abnormality {
            id: "silent-orchestra",
            name: LocalizedText::new("The Silent Orchestra", "寂静的管弦乐团"),
            code: "T-01-31",
            risk_level: Grade::Aleph,
            description: LocalizedText::new(
                "A conductor and orchestra that plays the music of the apocalypse.",
                "演奏末日乐章的指挥家与管弦乐团。",
            ),
            portrait: "🎼",
            pe_info: LocalizedText::new(
                "Facility-wide threat when breaching. The concert must never begin.",
                "出逃时威胁波及全设施。音乐会绝不能开始。",
            ),
            max_energy: 45,
            breach_condition: Some("Specific pattern of work failures triggers the concert"),
            work_preference: WorkPreference {
                instinct: Normal,
                insight: Best,
                attachment: Normal,
                repression: Good,
            },
            special_notes: vec![
                "Can cause facility-wide damage",
                "The \"concert\" is a DPS race",
                "Prepare high-level suppression teams",
                "E.G.O weapon: Da Capo",
            ],
            damage_type: DamageType::Pale,
            encode_value: 65,
        },
        Abnormality {
            id: "plague-doctor",
            name: LocalizedText::new("Plague Doctor", "瘟疫医生"),
            code: "O-01-45",
            risk_level: Grade::Waw,
            description: LocalizedText::new(
                "A doctor who speaks of blessings. His gifts are not what they seem.",
                "一位口称祝福的医生。他的馈赠并非表面那样。",
            ),
            portrait: "🎭",
            pe_info: LocalizedText::new(
                "Initially appears helpful. Hidden transformation mechanic.",
                "起初看似无害。存在隐藏的转化机制。",
            ),
            max_energy: 30,
            breach_condition: Some("After blessing 12 employees, transforms into WhiteNight"),
            work_preference: WorkPreference {
                instinct: Good,
                insight: Good,
                attachment: Bad,
                repression: Best,
            },
            special_notes: vec![
                "\"Blessings\" are actually curses",
                "Track blessed employees carefully",
                "Do NOT let 12 employees be blessed",
                "Connection to Apocalypse Bird",
            ],
            damage_type: DamageType::White,
            encode_value: 42,
        },
        Abnormality {
            id: "red-shoes",
            name: LocalizedText::new("Red Shoes", "红舞鞋"),
            code: "O-04-08",
            risk_level: Grade::He,
            description: LocalizedText::new(
                "Beautiful red shoes that dance on their own. They hunger for feet.",
                "一双自己起舞的美丽红鞋。它们渴求着双足。",
            ),
            portrait: "👠",
            pe_info: LocalizedText::new(
                "Employees may be compelled to wear the shoes during work.",
                "员工在工作中可能被迫穿上红鞋。",
            ),
            max_energy: 18,
            breach_condition: Some("Lower work success or employee with low Temperance"),
            work_preference: WorkPreference {
                instinct: Bad,
                insight: Good,
                attachment: Normal,
                repression: Good,
            },
            special_notes: vec![
                "Possessed employees dance to death",
                "Avoid employees with low Temperance",
                "Can spread possession during breach",
            ],
            damage_type: DamageType::Red,
            encode_value: 20,
        },
        Abnormality {
            id: "big-bird",
            name: LocalizedText::new("Big Bird", "大鸟"),
            code: "O-02-40",
            risk_level: Grade::Waw,
            description: LocalizedText::new(
                "A large yellow bird with lantern eyes. It watches over the forest.",
                "一只有着灯笼之眼的黄色大鸟。它守望着森林。",
            ),
            portrait: "🐦",
            pe_info: LocalizedText::new(
                "One of the three Birds of the Black Forest. Obsessed with watching.",
                "黑森林三鸟之一。执着于注视。",
            ),
            max_energy: 28,
            breach_condition: Some("When certain conditions align between the three birds"),
            work_preference: WorkPreference {
                instinct: Normal,
                insight: Best,
                attachment: Normal,
                repression: Bad,
            },
            special_notes: vec![
                "Part of Apocalypse Bird",
                "Keep separated from other birds",
                "Lantern eyes can paralyze",
                "E.G.O weapon: Lamp",
            ],
            damage_type: DamageType::Black,
            encode_value: 35,
        },
    ]
}

pub(crate) fn sephirahs() -> Vec<Sephirah> {
    vec![
        Sephirah {
            id: "malkuth",
            name: "Malkuth",
            department: "Control Team",
            role: "Sephirah of Control",
            description: "The first Sephirah you'll encounter. Despite her cheerful demeanor, she hides deep anxieties about perfection and control.",
            portrait: "👧",
            personality: "Energetic and optimistic, yet struggles with perfectionism. Her constant energy masks inner turmoil.",
            suppression_guide: "Focus on consistent work patterns. Don't let energy quotas fall behind. Her meltdown involves facility-wide damage.",
            quest_reward: "Unlock deeper story elements and new research options.",
            connections: vec!["Yesod", "Angela"],
        },
        Sephirah {
            id: "yesod",
            name: "Yesod",
            department: "Information Team",
            role: "Sephirah of Information",
            description: "Cold and analytical, Yesod processes data without apparent emotion. His detachment serves as both strength and weakness.",
            portrait: "📊",
            personality: "Logical and detached. Values efficiency over sentiment. His coldness is a defense mechanism.",
            suppression_guide: "Maintain precise documentation. Avoid errors in work orders. Information-based meltdowns.",
            quest_reward: "Access to advanced abnormality data and research.",
            connections: vec!["Malkuth", "Hod"],
        },
        Sephirah {
            id: "hod",
            name: "Hod",
            department: "Training Team",
            role: "Sephirah of Training",
            description: "Kind and supportive, Hod cares deeply for employees. Her empathy makes her vulnerable to the facility's horrors.",
            portrait: "💚",
            personality: "Gentle and caring. Genuinely wants to help everyone. Prone to guilt and despair.",
            suppression_guide: "Monitor employee mental health. Her meltdowns involve employee-targeting effects.",
            quest_reward: "Enhanced employee training capabilities.",
            connections: vec!["Yesod", "Netzach"],
        },
        Sephirah {
            id: "netzach",
            name: "Netzach",
            department: "Safety Team",
            role: "Sephirah of Safety",
            description: "Once passionate about safety, Netzach has become cynical and apathetic after seeing too much death.",
            portrait: "🍺",
            personality: "Jaded and nihilistic. Uses substances to cope. Beneath the apathy lies genuine pain.",
            suppression_guide: "Keep mortality rates low. His meltdowns reflect facility-wide safety failures.",
            quest_reward: "Advanced healing and safety protocols.",
            connections: vec!["Hod", "Tiphereth"],
        },
        Sephirah {
            id: "tiphereth",
            name: "Tiphereth",
            department: "Central Command Team",
            role: "Sephirah of Central Command",
            description: "Two children who share the name and role. Their existence hints at deeper secrets within the corporation.",
            portrait: "👫",
            personality: "One optimistic, one pessimistic. Their duality represents the facility's moral struggle.",
            suppression_guide: "Balance is key. Their meltdowns involve central facility functions.",
            quest_reward: "Core facility enhancements.",
            connections: vec!["Netzach", "Chesed", "Gebura"],
        },
        Sephirah {
            id: "chesed",
            name: "Chesed",
            department: "Welfare Team",
            role: "Sephirah of Welfare",
            description: "A calm, coffee-loving overseer who maintains composure through any crisis. His tranquility masks profound weariness.",
            portrait: "☕",
            personality: "Serene and accepting. Has made peace with the facility's nature. Perhaps too accepting.",
            suppression_guide: "Maintain employee morale. His meltdowns are subtle but far-reaching.",
            quest_reward: "Enhanced welfare and morale systems.",
            connections: vec!["Tiphereth", "Gebura"],
        },
        Sephirah {
            id: "gebura",
            name: "Gebura",
            department: "Disciplinary Team",
            role: "Sephirah of Discipline",
            description: "Once known as the Red Mist, the most powerful Color. Now she channels her fury into protecting the facility.",
            portrait: "⚔️",
            personality: "Fierce and militant. Values strength above all. Her rage is legendary but controlled.",
            suppression_guide: "Her meltdowns are combat-focused. Prepare your strongest teams.",
            quest_reward: "Elite combat training and equipment.",
            connections: vec!["Tiphereth", "Chesed", "Binah", "Hokma"],
        },
        Sephirah {
            id: "binah",
            name: "Binah",
            department: "Extraction Team",
            role: "Sephirah of Extraction",
            description: "Mysterious and philosophical. Binah speaks in riddles and seems to know more than she reveals.",
            portrait: "🔮",
            personality: "Enigmatic and patient. Her words carry hidden meaning. Connected to the very nature of the facility.",
            suppression_guide: "Her challenges are conceptual. Prepare for reality-bending encounters.",
            quest_reward: "Deep lore revelations and advanced extraction.",
            connections: vec!["Gebura", "Hokma", "Angela"],
        },
        Sephirah {
            id: "hokma",
            name: "Hokma",
            department: "Architecture Team",
            role: "Sephirah of Architecture",
            description: "The oldest Sephirah, Hokma has watched over the facility since its beginning. He carries the weight of all its history.",
            portrait: "🏛️",
            personality: "Patient and wise, yet burdened. His knowledge of the facility's past is unparalleled.",
            suppression_guide: "His challenges involve the facility's fundamental structure. Endgame content.",
            quest_reward: "Ultimate facility transformations.",
            connections: vec!["Gebura", "Binah", "Angela", "Ayin"],
        },
    ]
}
