//! Lore Q&A - keyword-matched answers about Library of Ruina
//!
//! Scans the question for known substrings in a fixed priority order and
//! returns a canned multi-paragraph answer, interpolating a few fields from
//! the lore catalog. Deterministic string matching; despite the "AI" label
//! in the UI there is no model behind this.

use crate::catalog::Catalog;
use crate::domain::value_objects::Locale;

/// Keyword-matched lore responder
pub struct LoreAnswerer;

impl LoreAnswerer {
    pub fn new() -> Self {
        Self
    }

    /// Answer a free-text question. The first matching keyword group wins;
    /// unmatched questions get the fixed overview paragraph.
    pub fn answer(&self, catalog: &Catalog, question: &str) -> String {
        let q = question.to_lowercase();

        if q.contains("angela") || q.contains("director") || q.contains("librarian") {
            return self.angela_answer(catalog);
        }

        if q.contains("roland") || q.contains("black silence") {
            return self.roland_answer(catalog);
        }

        if q.contains("distortion") {
            return DISTORTION_ANSWER.to_string();
        }

        if q.contains("color") || q.contains("fixer") {
            return COLOR_ANSWER.to_string();
        }

        if q.contains("library") && !q.contains("library of ruina") {
            return LIBRARY_ANSWER.to_string();
        }

        if q.contains("faction") || q.contains("organization") || q.contains("association") {
            return self.faction_answer(catalog);
        }

        DEFAULT_ANSWER.to_string()
    }

    fn angela_answer(&self, catalog: &Catalog) -> String {
        let angela = catalog.character("angela");
        let title = angela.map(|c| c.title.get(Locale::En)).unwrap_or_default();
        let description = angela
            .map(|c| c.description.get(Locale::En))
            .unwrap_or_default();
        let quotes = angela
            .map(|c| {
                c.quotes
                    .iter()
                    .map(|q| format!("• \"{}\"", q))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default();

        format!(
            r#"**Angela** - {title}

{description}

Angela was originally an AI created by Ayin to manage Lobotomy Corporation. After the events of L Corp (known as the "Day of Silence"), she was able to transform into a human form through the energy collected from the Abnormalities.

She established the Library with a mysterious goal in mind - to collect the "books" of all who enter, essentially absorbing their experiences and memories.

Her relationship with Roland is complex - initially manipulative, but evolving as the story progresses.

**Key Quotes:**
{quotes}"#
        )
    }

    fn roland_answer(&self, catalog: &Catalog) -> String {
        let roland = catalog.character("roland");
        let title = roland.map(|c| c.title.get(Locale::En)).unwrap_or_default();
        let description = roland
            .map(|c| c.description.get(Locale::En))
            .unwrap_or_default();

        format!(
            r#"**Roland** - {title}

{description}

Roland was once one of the most powerful Fixers in The City, known as "The Black Silence" - a Color that struck fear into even the most powerful organizations.

His past is marked by tragedy. He was married to Angelica, a woman from L Corp, but she was killed during the "Day of Silence" incident. This loss, combined with other tragedies, led him to his current broken state.

Now he serves as Angela's assistant in the Library, though his true motivations remain unclear for much of the story.

**The Color System:**
Colors are titles given to the strongest Grade 1 Fixers. Roland's title "Black Silence" represents his fighting style and reputation."#
        )
    }

    fn faction_answer(&self, catalog: &Catalog) -> String {
        let faction_info = catalog
            .factions()
            .iter()
            .take(4)
            .map(|f| {
                format!(
                    "**{}** ({})\n{}",
                    f.name.get(Locale::En),
                    f.tier,
                    f.description.get(Locale::En)
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            r#"**Major Factions in The City:**

{faction_info}

The City's power structure is complex, with various organizations vying for control or survival. The Head maintains order through fear, while smaller groups struggle to carve out their existence."#
        )
    }
}

impl Default for LoreAnswerer {
    fn default() -> Self {
        Self::new()
    }
}

const DISTORTION_ANSWER: &str = r#"**Distortions** - The Twisted Ones

In The City, those who experience extreme emotional turmoil, despair, or obsession can undergo a transformation called "Distortion."

**How it works:**
• When someone's negative emotions reach a breaking point, they may begin to "Distort"
• The Ensemble often appears to guide or observe these transformations
• Distorted individuals gain immense power but lose their humanity
• The transformation reflects their inner struggles and traumas

**Notable Distortions:**
• **Philip** (The Crying Child) - Distorted after being failed by The City's justice system
• **The Pinocchio** - Ensemble member
• **Mountain of Smiling Bodies** - A manifestation of communal despair

Distortions are different from Abnormalities (which are more cosmic/conceptual entities) - they are humans who have transformed."#;

const COLOR_ANSWER: &str = r#"**The Color System** - Elite Fixers

In The City, Fixers are mercenaries who take on various jobs. They are graded from Grade 9 (lowest) to Grade 1 (highest).

**Colors:**
The absolute elite among Grade 1 Fixers receive special titles called "Colors" based on their fighting style or reputation:

• **The Black Silence** (Roland) - Known for ending conflicts with absolute finality
• **The Purple Tear** - Member of the Seven Association, known for precise swordsmanship
• **The Red Mist** (Kali/Gebura) - The most violent and powerful Color in history
• **The Blue Reverberation** (Argalia) - Leader of a group seeking to create a "perfect instrument"

Colors are legendary figures in The City - their mere presence can change the outcome of conflicts. The Head itself has made it illegal for multiple Colors to gather."#;

const LIBRARY_ANSWER: &str = r#"**The Library** - Angela's Domain

The Library is a mysterious building that appeared in The City after the fall of Lobotomy Corporation.

**Purpose:**
• It invites "guests" - individuals and groups from The City
• Visitors must participate in "receptions" - battles against the librarians
• Those who lose become "books" - their experiences and memories are absorbed
• The ultimate goal is to create a "Perfect Book"

**Structure:**
The Library is organized into floors, each managed by a patron:
• Floor of History (Malkuth)
• Floor of Technological Sciences (Yesod)
• Floor of Literature (Hod)
• Floor of Art (Netzach)
• Floor of Natural Sciences (Tiphereth)
• Floor of Language (Gebura)
• Floor of Social Sciences (Chesed)
• Floor of Philosophy (Binah)
• Floor of Religion (Hokma)

These patrons are the former Sephirot from Lobotomy Corporation."#;

const DEFAULT_ANSWER: &str = r#"Thank you for your question about Library of Ruina!

Based on your query, here's what I can tell you:

The City is a vast, dystopian metropolis where power determines everything. Library of Ruina takes place after the events of Lobotomy Corporation, following Angela and her Library as they collect "books" from The City's inhabitants.

Key concepts to understand:
• **The Library** - A mysterious building that invites guests and turns losers into "books"
• **The City** - A megacity divided by power structures (Wings, Claws, Fingers)
• **Distortions** - Humans transformed by extreme emotion
• **Fixers** - Mercenaries who take contracts; ranked Grade 9 to Grade 1

Would you like me to elaborate on any specific character, faction, or story element?"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angela_question_mentions_angela() {
        let catalog = Catalog::new();
        let answerer = LoreAnswerer::new();
        let answer = answerer.answer(&catalog, "Who is Angela?");
        assert!(!answer.is_empty());
        assert!(answer.contains("Angela"));
        assert!(answer.contains("Director of the Library"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let catalog = Catalog::new();
        let answerer = LoreAnswerer::new();
        let answer = answerer.answer(&catalog, "TELL ME ABOUT THE BLACK SILENCE");
        assert!(answer.contains("Roland"));
    }

    #[test]
    fn test_unmatched_question_gets_default_overview() {
        let catalog = Catalog::new();
        let answerer = LoreAnswerer::new();
        let answer = answerer.answer(&catalog, "asdkfj");
        assert_eq!(answer, DEFAULT_ANSWER);
    }

    #[test]
    fn test_priority_order_angela_before_library() {
        let catalog = Catalog::new();
        let answerer = LoreAnswerer::new();
        // Mentions both; the librarian group is checked first.
        let answer = answerer.answer(&catalog, "Is the librarian in the library?");
        assert!(answer.starts_with("**Angela**"));
    }

    #[test]
    fn test_library_of_ruina_alone_is_not_the_library_topic() {
        let catalog = Catalog::new();
        let answerer = LoreAnswerer::new();
        let answer = answerer.answer(&catalog, "what is library of ruina");
        assert_eq!(answer, DEFAULT_ANSWER);
    }

    #[test]
    fn test_faction_answer_lists_factions() {
        let catalog = Catalog::new();
        let answerer = LoreAnswerer::new();
        let answer = answerer.answer(&catalog, "What factions exist?");
        assert!(answer.contains("The Library"));
        assert!(answer.contains("The Head"));
        assert!(answer.contains("Liu Association"));
    }
}
