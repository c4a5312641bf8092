//! Word lists backing the rule-based polarity model.
//!
//! Valences sit on a -4.0..=4.0 scale (mean human rating per word).
//! Mild words such as "fine" or "okay" are left out so that plain
//! acknowledgements stay neutral.

pub static VALENCES: &[(&str, f64)] = &[
    // Positive
    ("agree", 1.5),
    ("amazing", 2.8),
    ("appreciate", 1.7),
    ("appreciated", 2.3),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("better", 1.9),
    ("brilliant", 2.8),
    ("clear", 1.6),
    ("congrats", 2.4),
    ("congratulations", 2.9),
    ("cool", 1.3),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("epic", 2.2),
    ("excellent", 2.7),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("fantastic", 2.6),
    ("favorite", 2.0),
    ("favourite", 2.0),
    ("fun", 2.3),
    ("funny", 1.9),
    ("genius", 1.9),
    ("glad", 2.0),
    ("good", 1.9),
    ("great", 3.1),
    ("haha", 2.0),
    ("happy", 2.7),
    ("helpful", 1.8),
    ("hilarious", 1.7),
    ("impressive", 2.3),
    ("incredible", 2.6),
    ("informative", 1.7),
    ("inspiring", 2.2),
    ("interesting", 1.7),
    ("joy", 2.8),
    ("legend", 1.3),
    ("lol", 1.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("lovely", 2.8),
    ("loving", 2.9),
    ("masterpiece", 3.0),
    ("nice", 1.8),
    ("perfect", 2.7),
    ("pleasure", 2.7),
    ("proud", 2.1),
    ("recommend", 1.5),
    ("respect", 2.1),
    ("smart", 1.7),
    ("support", 1.7),
    ("thank", 1.5),
    ("thankful", 2.7),
    ("thanks", 1.9),
    ("useful", 1.9),
    ("welcome", 2.0),
    ("win", 2.8),
    ("winning", 2.4),
    ("wonderful", 2.7),
    ("wow", 2.8),
    ("yay", 2.4),
    // Negative
    ("angry", -2.3),
    ("annoying", -1.7),
    ("awful", -2.0),
    ("bad", -2.5),
    ("bored", -1.1),
    ("boring", -1.3),
    ("broken", -2.1),
    ("clickbait", -1.5),
    ("confused", -1.3),
    ("confusing", -1.3),
    ("cringe", -1.5),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("disgusting", -2.4),
    ("dislike", -1.6),
    ("dumb", -2.3),
    ("error", -1.7),
    ("fail", -2.5),
    ("failed", -2.3),
    ("fake", -2.1),
    ("garbage", -2.1),
    ("hate", -2.7),
    ("hated", -3.2),
    ("horrible", -2.5),
    ("hurt", -2.4),
    ("lame", -1.8),
    ("lazy", -1.5),
    ("liar", -2.4),
    ("lies", -1.8),
    ("mess", -1.7),
    ("misleading", -1.7),
    ("nonsense", -1.7),
    ("overrated", -1.5),
    ("pathetic", -2.1),
    ("poor", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("ridiculous", -1.5),
    ("sad", -2.1),
    ("scam", -2.8),
    ("spam", -1.5),
    ("stupid", -2.4),
    ("sucked", -2.0),
    ("sucks", -1.5),
    ("terrible", -2.5),
    ("trash", -2.0),
    ("ugly", -2.3),
    ("unfortunately", -1.4),
    ("unsubscribed", -1.0),
    ("useless", -1.8),
    ("waste", -1.8),
    ("wasted", -2.2),
    ("worse", -2.1),
    ("worst", -3.1),
    ("wrong", -2.1),
];

/// Intensifiers that raise the magnitude of the word they precede
pub static BOOSTERS: &[&str] = &[
    "absolutely",
    "amazingly",
    "completely",
    "deeply",
    "enormously",
    "entirely",
    "especially",
    "exceptionally",
    "extremely",
    "greatly",
    "highly",
    "hugely",
    "incredibly",
    "intensely",
    "more",
    "most",
    "particularly",
    "quite",
    "really",
    "remarkably",
    "so",
    "super",
    "thoroughly",
    "totally",
    "tremendously",
    "truly",
    "unbelievably",
    "utterly",
    "very",
];

/// Hedges that lower the magnitude of the word they precede
pub static DAMPENERS: &[&str] = &[
    "almost",
    "barely",
    "hardly",
    "kinda",
    "less",
    "marginally",
    "occasionally",
    "partly",
    "scarcely",
    "slightly",
    "somewhat",
    "sorta",
];

/// Words that flip the polarity of what follows. Any `n't` contraction counts too.
pub static NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "despite", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "neither", "never", "no", "nobody", "none", "nope", "nor",
    "nothing", "nowhere", "rarely", "seldom", "shouldnt", "wasnt", "werent", "without", "wont",
    "wouldnt", "not",
];

/// Words skipped by the term-frequency table
pub static STOP_WORDS: &[&str] = &[
    "about", "after", "again", "all", "also", "and", "any", "are", "because", "been", "but",
    "can", "did", "does", "dont", "for", "from", "had", "has", "have", "her", "him", "his",
    "how", "i'm", "it's", "its", "just", "more", "most", "not", "now", "one", "only", "our",
    "out", "she", "some", "than", "that", "the", "their", "them", "then", "there", "these",
    "they", "this", "those", "too", "very", "was", "were", "what", "when", "where", "which",
    "who", "why", "will", "with", "would", "you", "your", "you're",
];
