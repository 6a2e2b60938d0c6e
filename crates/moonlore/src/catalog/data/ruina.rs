//! Library of Ruina lore tables: characters, factions, and story events.
//!
//! Prose fields carry both locales.

use crate::domain::entities::{LoreCharacter, LoreEvent, LoreFaction};
use crate::domain::value_objects::{FactionTier, LocalizedText, SpoilerLevel};

pub(crate) fn characters() -> Vec<LoreCharacter> {
    vec![
        LoreCharacter {
            id: "angela",
            name: LocalizedText::new("Angela", "安吉拉"),
            title: LocalizedText::new("Director of the Library", "图书馆馆长"),
            faction: "The Library",
            description: LocalizedText::new(
                "Former AI secretary of Lobotomy Corporation, now transformed into a human form. She established the Library to collect the books of all who visit.",
                "脑叶公司昔日的人工智能秘书，如今化为人形。她建立图书馆，收集所有来访者的书。",
            ),
            first_appearance: "Prologue",
            is_playable: true,
            relations: vec!["Roland", "Ayin", "Carmen"],
            quotes: vec![
                "I am the librarian. Welcome to my Library.",
                "Every guest has a story worth collecting...",
            ],
        },
        LoreCharacter {
            id: "roland",
            name: LocalizedText::new("Roland", "罗兰"),
            title: LocalizedText::new("General Fixer / Office Director", "全能调停者 / 办公室主管"),
            faction: "The Library",
            description: LocalizedText::new(
                "A former Grade 1 Fixer known as \"The Black Silence\". After losing everything, he became entangled with Angela's Library.",
                "曾是被称为“黑色寂静”的1级调停者。在失去一切之后，他与安吉拉的图书馆纠缠在了一起。",
            ),
            first_appearance: "Prologue",
            is_playable: true,
            relations: vec!["Angela", "Angelica"],
            quotes: vec![
                "I'm just a fixer who took on a strange job.",
                "The City takes from everyone eventually.",
            ],
        },
        LoreCharacter {
            id: "binah",
            name: LocalizedText::new("Binah", "庇纳"),
            title: LocalizedText::new("Floor of Philosophy Patron", "哲学之层的指定者"),
            faction: "The Library",
            description: LocalizedText::new(
                "Former Head of the Extraction Team at L Corp, now a floor patron. Garion in her past life, she oversees deep philosophical receptions.",
                "曾是脑叶公司摘录小组的负责人，如今是一层的指定者。前世名为加里翁，主持着深奥的哲学接待。",
            ),
            first_appearance: "Keter Floor unlock",
            is_playable: true,
            relations: vec!["Angela", "Hokma", "Carmen"],
            quotes: vec!["All things must return to where they came from."],
        },
        LoreCharacter {
            id: "gebura",
            name: LocalizedText::new("Gebura", "格布拉"),
            title: LocalizedText::new("Floor of Language Patron", "语言之层的指定者"),
            faction: "The Library",
            description: LocalizedText::new(
                "The Red Mist, formerly known as Kali. The most powerful Color in the history of the Fixers, now serving as a floor patron.",
                "“红雾”，本名迦利。调停者历史上最强大的色彩，如今是一层的指定者。",
            ),
            first_appearance: "Language Floor unlock",
            is_playable: true,
            relations: vec!["Angela", "Salvador"],
            quotes: vec!["Strength is the only language The City understands."],
        },
        LoreCharacter {
            id: "philip",
            name: LocalizedText::new("Philip", "菲利普"),
            title: LocalizedText::new("Crying Child", "哭泣的孩子"),
            faction: "The Ensemble",
            description: LocalizedText::new(
                "A young man whose tragic story led him to become a Distortion. His reception represents the cruel reality of The City's justice system.",
                "一个因悲剧而扭曲的年轻人。他的接待展现了都市司法体系的残酷现实。",
            ),
            first_appearance: "Yun Office Reception",
            is_playable: false,
            relations: vec!["Salvador", "Yun Office"],
            quotes: vec!["Why... why did this happen to me?"],
        },
        LoreCharacter {
            id: "xiao",
            name: LocalizedText::new("Xiao", "箫"),
            title: LocalizedText::new("Liu Association Director", "刘协会主管"),
            faction: "Liu Association",
            description: LocalizedText::new(
                "Director of the Liu Association Section 2. Known for her calm demeanor and deadly swordsmanship.",
                "刘协会2科的主管。以冷静的气质与致命的剑术闻名。",
            ),
            first_appearance: "Liu Association Reception",
            is_playable: false,
            relations: vec!["Liu Association", "Miris"],
            quotes: vec!["Our blade serves The City."],
        },
        LoreCharacter {
            id: "eileen",
            name: LocalizedText::new("Eileen", "艾琳"),
            title: LocalizedText::new("Zwei Association Captain", "茨维协会队长"),
            faction: "Zwei Association",
            description: LocalizedText::new(
                "A captain of the Zwei Association who struggles with the moral compromises required by her duty.",
                "茨维协会的一名队长，在职责所要求的道德妥协中挣扎。",
            ),
            first_appearance: "Zwei Association Reception",
            is_playable: false,
            relations: vec!["Zwei Association"],
            quotes: vec![],
        },
    ]
}

pub(crate) fn factions() -> Vec<LoreFaction> {
    vec![
        LoreFaction {
            id: "the-library",
            name: LocalizedText::new("The Library", "图书馆"),
            tier: FactionTier::Other,
            description: LocalizedText::new(
                "A mysterious building that appeared after the fall of L Corp. It invites guests to \"donate\" their books through receptions.",
                "脑叶公司倒塌后出现的神秘建筑。它邀请宾客通过接待“捐赠”他们的书。",
            ),
            key_members: vec![
                "Angela", "Roland", "Binah", "Gebura", "Hokma", "Chesed", "Malkuth", "Yesod",
                "Hod", "Netzach", "Tipherath",
            ],
            philosophy: LocalizedText::new(
                "Collect all books to complete the perfect book.",
                "收集所有的书，以完成完美之书。",
            ),
        },
        LoreFaction {
            id: "the-head",
            name: LocalizedText::new("The Head", "头脑"),
            tier: FactionTier::Head,
            description: LocalizedText::new(
                "The governing body of The City, consisting of A Corp, B Corp, C Corp, and other Wings. They maintain order through absolute power.",
                "都市的统治机构，由A社、B社、C社等翼构成。他们以绝对的力量维持秩序。",
            ),
            key_members: vec!["Arbiters", "Cane Office"],
            philosophy: LocalizedText::new(
                "Order through control and fear.",
                "以控制与恐惧维持秩序。",
            ),
        },
        LoreFaction {
            id: "liu-association",
            name: LocalizedText::new("Liu Association", "刘协会"),
            tier: FactionTier::Fixer,
            description: LocalizedText::new(
                "An Association known for their Eastern swordsmanship and honorable conduct. One of the more reputable Associations.",
                "以东方剑术与光明磊落的作风闻名的协会。声誉较好的协会之一。",
            ),
            key_members: vec!["Xiao", "Miris", "Cecil", "Mei", "Lowell"],
            philosophy: LocalizedText::new(
                "Honor in battle, loyalty to Section.",
                "战斗中重荣誉，对科室尽忠诚。",
            ),
        },
        LoreFaction {
            id: "zwei-association",
            name: LocalizedText::new("Zwei Association", "茨维协会"),
            tier: FactionTier::Fixer,
            description: LocalizedText::new(
                "A mercenary Association that takes various contracts. Known for their professional but morally flexible approach.",
                "承接各类委托的雇佣协会。以专业但道德灵活的作风闻名。",
            ),
            key_members: vec!["Eileen", "Walter", "Ronan"],
            philosophy: LocalizedText::new(
                "Complete the contract, no matter the cost.",
                "不惜一切代价完成委托。",
            ),
        },
        LoreFaction {
            id: "the-ensemble",
            name: LocalizedText::new("The Ensemble", "乐团"),
            tier: FactionTier::Other,
            description: LocalizedText::new(
                "A mysterious group connected to Distortions. They seem to guide or observe those who fall into despair.",
                "与扭曲现象相关的神秘团体。他们似乎在引导或观察陷入绝望的人。",
            ),
            key_members: vec!["Pluto", "Oswald", "Elena"],
            philosophy: LocalizedText::new(
                "Embrace the Distortion, become something new.",
                "拥抱扭曲，化为新生。",
            ),
        },
        LoreFaction {
            id: "seven-association",
            name: LocalizedText::new("Seven Association", "七协会"),
            tier: FactionTier::Fixer,
            description: LocalizedText::new(
                "An elite Fixer Association known for producing high-grade Fixers. Their members are numbered with colors.",
                "以培养高阶调停者闻名的精英协会。其成员以色彩编号。",
            ),
            key_members: vec!["Argalia", "The Purple Tear"],
            philosophy: LocalizedText::new(
                "Excellence in all forms of combat.",
                "追求一切战斗形式的卓越。",
            ),
        },
        LoreFaction {
            id: "the-fingers",
            name: LocalizedText::new("The Fingers", "手指"),
            tier: FactionTier::Finger,
            description: LocalizedText::new(
                "Criminal syndicates operating in the shadows of The City. They control various illegal operations.",
                "活跃在都市阴影中的犯罪集团。他们掌控着各类非法生意。",
            ),
            key_members: vec!["Thumb", "Index", "Middle", "Ring", "Pinky"],
            philosophy: LocalizedText::new("Profit above all else.", "利益高于一切。"),
        },
    ]
}

pub(crate) fn events() -> Vec<LoreEvent> {
    vec![
        LoreEvent {
            id: "library-appears",
            title: LocalizedText::new("The Library Appears", "图书馆现世"),
            description: LocalizedText::new(
                "After the events at L Corporation, a mysterious building appeared in The City - The Library. Angela, now in human form, begins her plan to collect \"books\".",
                "脑叶公司事件之后，一座神秘的建筑出现在都市之中——图书馆。化为人形的安吉拉开始了收集“书”的计划。",
            ),
            order: 1,
            spoiler_level: SpoilerLevel::Early,
            related_characters: vec!["angela", "roland"],
        },
        LoreEvent {
            id: "urban-nightmare",
            title: LocalizedText::new("Urban Nightmare Receptions", "都市噩梦接待"),
            description: LocalizedText::new(
                "The Library begins receiving guests from various City factions. From small-time thugs to organized syndicates, each visitor becomes a book.",
                "图书馆开始接待来自都市各方势力的宾客。从小混混到有组织的犯罪集团，每位来访者都化作一本书。",
            ),
            order: 2,
            spoiler_level: SpoilerLevel::Early,
            related_characters: vec!["angela", "roland"],
        },
        LoreEvent {
            id: "distortion-events",
            title: LocalizedText::new("Distortion Phenomenon", "扭曲现象"),
            description: LocalizedText::new(
                "Some individuals, consumed by despair or obsession, transform into aberrations called Distortions. The Ensemble seems to orchestrate these transformations.",
                "一些被绝望或执念吞噬的人，转化为被称为扭曲体的怪物。乐团似乎在幕后策划这些转化。",
            ),
            order: 3,
            spoiler_level: SpoilerLevel::Mid,
            related_characters: vec!["philip"],
        },
        LoreEvent {
            id: "impurity",
            title: LocalizedText::new("The Impurity", "不净"),
            description: LocalizedText::new(
                "A Distortion phenomenon spreads like a plague, threatening entire districts. The Library must face this existential threat.",
                "扭曲现象如瘟疫般蔓延，威胁着整片街区。图书馆必须直面这场存亡之危。",
            ),
            order: 4,
            spoiler_level: SpoilerLevel::Mid,
            related_characters: vec![],
        },
        LoreEvent {
            id: "black-silence",
            title: LocalizedText::new("The Black Silence Awakens", "黑色寂静觉醒"),
            description: LocalizedText::new(
                "Roland's true identity as \"The Black Silence\" is revealed. His past with the Color system and his connection to tragedies in The City comes to light.",
                "罗兰作为“黑色寂静”的真实身份被揭开。他与色彩体系的过去，以及与都市诸多悲剧的关联浮出水面。",
            ),
            order: 5,
            spoiler_level: SpoilerLevel::Endgame,
            related_characters: vec!["roland"],
        },
    ]
}
