//! Seed content written to the store on first start.

use std::fmt;

use super::Tip;

const QUOTES: [&str; 7] = [
    "The only way out is through. – Robert Frost",
    "Feelings are just visitors. Let them come and go. – Mooji",
    "Your mental health is a priority, not a luxury.",
    "It's okay to not be okay. Healing is not linear.",
    "You are stronger than you think. You are braver than you believe.",
    "Small progress is still progress. Celebrate every step forward.",
    "The greatest glory in living lies not in never falling, but in rising every time we fall. – Nelson Mandela",
];

const TIPS: [(&str, &str); 8] = [
    ("Physical", "Take a 10-minute walk outside. Fresh air and movement can boost your mood instantly."),
    ("Mental", "Practice the 5-4-3-2-1 grounding technique: Name 5 things you see, 4 you can touch, 3 you hear, 2 you smell, and 1 you taste."),
    ("Social", "Reach out to a friend or loved one. A simple conversation can brighten your day."),
    ("Creative", "Listen to your favorite uplifting music or create a mood-boosting playlist."),
    ("Mindfulness", "Try 5 minutes of deep breathing. Inhale for 4 counts, hold for 4, exhale for 6."),
    ("Self-Care", "Do something nice for yourself today, no matter how small. You deserve it."),
    ("Gratitude", "Write down 3 things you're grateful for right now. Gratitude shifts perspective."),
    ("Physical", "Drink a glass of water and have a healthy snack. Sometimes mood is affected by hydration and nutrition."),
];

const FACTS: [&str; 7] = [
    "Smiling, even forced, can trigger the release of dopamine and serotonin, improving your mood.",
    "Spending just 20 minutes in nature can significantly reduce stress hormone levels.",
    "Writing about your feelings for 15 minutes a day can improve both mental and physical health.",
    "Exercise releases endorphins, often called 'feel-good' hormones, which naturally elevate mood.",
    "Laughter decreases stress hormones and increases immune cells and infection-fighting antibodies.",
    "Getting 7-9 hours of quality sleep is crucial for emotional regulation and mental health.",
    "Acts of kindness boost serotonin and oxytocin levels, making both giver and receiver feel good.",
];

/// The three seeded content lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentList {
    Quotes,
    Tips,
    Facts,
}

impl ContentList {
    /// All lists, in bootstrap order.
    pub const ALL: [ContentList; 3] = [ContentList::Quotes, ContentList::Tips, ContentList::Facts];

    /// Store key holding the JSON-encoded list.
    pub fn storage_key(&self) -> &'static str {
        match self {
            ContentList::Quotes => "quotes",
            ContentList::Tips => "tips",
            ContentList::Facts => "facts",
        }
    }

    /// Store key of the flag marking the list as written.
    pub fn sentinel_key(&self) -> &'static str {
        match self {
            ContentList::Quotes => "quotes_initialized",
            ContentList::Tips => "tips_initialized",
            ContentList::Facts => "facts_initialized",
        }
    }

    /// JSON encoding of the seed list, as stored under `storage_key`.
    pub fn seed_json(&self) -> Result<String, serde_json::Error> {
        match self {
            ContentList::Quotes => serde_json::to_string(&seed_quotes()),
            ContentList::Tips => serde_json::to_string(&seed_tips()),
            ContentList::Facts => serde_json::to_string(&seed_facts()),
        }
    }
}

impl fmt::Display for ContentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_key())
    }
}

pub fn seed_quotes() -> Vec<String> {
    QUOTES.iter().map(|q| q.to_string()).collect()
}

pub fn seed_tips() -> Vec<Tip> {
    TIPS.iter()
        .map(|(category, content)| Tip::new(*category, *content))
        .collect()
}

pub fn seed_facts() -> Vec<String> {
    FACTS.iter().map(|f| f.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_lists_have_expected_sizes() {
        assert_eq!(seed_quotes().len(), 7);
        assert_eq!(seed_tips().len(), 8);
        assert_eq!(seed_facts().len(), 7);
    }

    #[test]
    fn keys_follow_storage_layout() {
        assert_eq!(ContentList::Quotes.storage_key(), "quotes");
        assert_eq!(ContentList::Tips.sentinel_key(), "tips_initialized");
        assert_eq!(ContentList::Facts.sentinel_key(), "facts_initialized");
    }

    #[test]
    fn tips_seed_json_decodes_back_to_tips() {
        let json = ContentList::Tips.seed_json().unwrap();
        let tips: Vec<Tip> = serde_json::from_str(&json).unwrap();
        assert_eq!(tips, seed_tips());
    }

    #[test]
    fn quotes_seed_json_is_string_array() {
        let json = ContentList::Quotes.seed_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.as_array().unwrap().iter().all(|v| v.is_string()));
    }
}
