//! Built-in word lists for the lexicon analyzer.
//!
//! Scores loosely follow common polarity lexicons and favour the vocabulary
//! people use when describing sleep, energy, and mood.

pub(super) fn is_negator(word: &str) -> bool {
    matches!(
        word,
        "not" | "no" | "never" | "nor" | "cannot" | "without" | "hardly" | "barely"
    ) || word.ends_with("n't")
}

pub(super) fn intensifier_factor(word: &str) -> Option<f64> {
    let factor = match word {
        "extremely" | "incredibly" | "totally" | "utterly" => 1.5,
        "very" | "really" | "so" | "super" | "truly" | "deeply" => 1.3,
        "quite" | "pretty" | "too" => 1.15,
        "somewhat" | "slightly" | "kinda" | "bit" => 0.6,
        _ => return None,
    };
    Some(factor)
}

pub(super) fn word_polarity(word: &str) -> Option<f64> {
    let score = match word {
        // Strongly positive.
        "amazing" | "awesome" | "excellent" | "fantastic" | "wonderful" | "perfect"
        | "brilliant" | "incredible" | "outstanding" | "superb" => 0.9,
        "love" | "loved" | "loving" | "joy" | "joyful" | "thrilled" | "delighted" | "ecstatic"
        | "blessed" | "best" => 0.8,
        "happy" | "great" | "glad" | "excited" | "grateful" | "thankful" | "proud"
        | "refreshed" | "energized" | "energised" => 0.75,
        // Positive.
        "good" | "nice" | "lovely" | "pleased" | "cheerful" | "hopeful" | "motivated"
        | "confident" | "rested" | "restful" | "peaceful" | "fun" | "enjoyed" | "enjoy" => 0.6,
        "calm" | "relaxed" | "relaxing" | "content" | "comfortable" | "better" | "productive"
        | "strong" | "positive" | "optimistic" | "well" | "smile" | "smiling" => 0.5,
        "fine" | "okay" | "ok" | "alright" | "decent" | "steady" | "progress" | "improving" => 0.2,
        // Strongly negative.
        "awful" | "terrible" | "horrible" | "miserable" | "hopeless" | "worthless" | "worst"
        | "devastated" | "dreadful" | "unbearable" => -1.0,
        "hate" | "hated" | "depressed" | "panic" | "panicking" | "furious" | "desperate"
        | "broken" | "heartbroken" => -0.8,
        // Negative.
        "bad" | "sad" | "unhappy" | "angry" | "upset" | "lonely" | "anxious" | "afraid"
        | "scared" | "worried" | "stressed" | "overwhelmed" | "exhausted" | "sick" => -0.6,
        "tired" | "sleepy" | "restless" | "groggy" | "drained" | "nervous" | "frustrated"
        | "annoyed" | "bored" | "worse" | "hurt" | "pain" | "sore" | "cry" | "crying" => -0.45,
        "meh" | "difficult" | "hard" | "tough" | "struggle" | "struggling" | "insomnia"
        | "nightmare" | "nightmares" | "lost" | "down" => -0.3,
        _ => return None,
    };
    Some(score)
}
