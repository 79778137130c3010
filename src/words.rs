/// Built-in English positive words.
///
/// Surface forms as authored; the lexicon stems them at build time, so
/// inflected variants collapse onto one entry.
pub const POSITIVE_WORDS: &[&str] = &[
    "accomplish", "accurate", "achievement", "admire", "adorable", "advantage",
    "affordable", "agreeable", "amaze", "amazing", "amazingly", "amusing", "appreciate",
    "approve", "attractive", "awesome", "beautiful", "beautifully", "beloved", "benefit",
    "best", "better", "bless", "blessed", "bliss", "bonus", "brave", "breakthrough",
    "bright", "brilliant", "calm", "celebrate", "charm", "charming", "cheer", "cheerful",
    "clean", "clever", "comfort", "comfortable", "congratulate", "congratulations",
    "cool", "courage", "courteous", "creative", "cute", "delight", "delighted",
    "delightful", "dependable", "easy", "effective", "efficient", "elegant", "enjoy",
    "enjoyable", "enthusiastic", "excellent", "excite", "excited", "exciting",
    "fabulous", "fair", "faithful", "fantastic", "fascinating", "fast", "favorite",
    "fine", "flawless", "fortunate", "free", "fresh", "friendly", "fun", "funny",
    "generous", "genius", "gentle", "glad", "glorious", "good", "gorgeous", "grace",
    "graceful", "grand", "grateful", "great", "happy", "harmony", "healthy", "helpful",
    "hero", "honest", "hope", "hopeful", "hug", "ideal", "impress", "impressive",
    "improve", "improvement", "incredible", "innovative", "inspire", "inspiring",
    "intelligent", "joy", "joyful", "kind", "laugh", "lovely", "love", "loyal", "lucky",
    "magnificent", "marvelous", "masterpiece", "merry", "nice", "outstanding",
    "peace", "peaceful", "perfect", "perfectly", "pleasant", "please", "pleased",
    "pleasure", "polite", "popular", "positive", "powerful", "praise", "precious",
    "pretty", "pride", "productive", "profit", "promising", "proud", "quality",
    "recommend", "refreshing", "reliable", "remarkable", "respect", "reward", "rich",
    "right", "safe", "satisfied", "satisfy", "smart", "smile", "smooth", "soothing",
    "sparkling", "spectacular", "splendid", "stable", "strong", "stunning", "success",
    "successful", "superb", "support", "supportive", "sweet", "talent", "talented",
    "terrific", "thank", "thankful", "thanks", "thrill", "thrilled", "thriving",
    "top", "triumph", "trust", "trusted", "useful", "valuable", "victory", "vibrant",
    "warm", "welcome", "well", "win", "winner", "wise", "wonderful", "worth", "wow",
    "yay",
];

/// Built-in English negative words
pub const NEGATIVE_WORDS: &[&str] = &[
    "abandon", "abuse", "accident", "ache", "afraid", "aggressive", "agony", "alarm",
    "anger", "angry", "annoy", "annoyed", "annoying", "anxious", "apathy", "appalling",
    "arrogant", "ashamed", "attack", "awful", "bad", "badly", "betray", "bitter",
    "blame", "boring", "broke", "broken", "bug", "buggy", "burden", "catastrophe",
    "cheat", "collapse", "complain", "complaint", "confuse", "confused", "corrupt",
    "crash", "crazy", "crime", "crisis", "critical", "cruel", "cry", "damage",
    "danger", "dangerous", "dead", "defeat", "defect", "delay", "depressed",
    "depressing", "despair", "destroy", "difficult", "dirty", "disappoint",
    "disappointed", "disappointing", "disaster", "disgust", "disgusting", "dislike",
    "dismal", "dreadful", "dull", "fail", "failure", "fake", "fault", "fear",
    "fearful", "filthy", "frustrate", "frustrated", "frustrating", "furious", "gloomy",
    "greed", "grief", "gross", "guilty", "harm", "harsh", "hate", "hatred", "hideous",
    "horrible", "horrific", "hostile", "hurt", "idiot", "ill", "inferior", "insane",
    "insult", "irritate", "jealous", "kill", "lame", "lazy", "lie", "liar", "lose",
    "loser", "loss", "lousy", "mad", "mess", "miserable", "misery", "mistake",
    "nasty", "negative", "nightmare", "noisy", "offend", "outrage", "pain", "painful",
    "panic", "pathetic", "poor", "problem", "regret", "reject", "ridiculous", "rude",
    "ruin", "sad", "sadly", "scam", "scare", "scared", "scary", "selfish", "shame",
    "shock", "sick", "slow", "sorry", "stupid", "suck", "sucks", "suffer", "terrible",
    "terribly", "threat", "tired", "tragedy", "tragic", "trouble", "ugly", "unfair",
    "unhappy", "unpleasant", "upset", "useless", "violent", "waste", "weak", "weird",
    "worry", "worse", "worst", "worthless", "wrong",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_lists_are_disjoint_as_authored() {
        let positive: HashSet<_> = POSITIVE_WORDS.iter().collect();
        let overlap: Vec<_> = NEGATIVE_WORDS.iter().filter(|w| positive.contains(w)).collect();
        assert!(overlap.is_empty(), "overlap: {:?}", overlap);
    }

    #[test]
    fn test_lists_are_lowercase_single_words() {
        for word in POSITIVE_WORDS.iter().chain(NEGATIVE_WORDS) {
            assert!(!word.is_empty());
            assert!(!word.contains(char::is_whitespace), "{:?}", word);
            assert_eq!(word.to_lowercase(), *word);
        }
    }
}
