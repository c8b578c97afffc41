/// Small built-in dictionary of three- and four-letter words
pub const DEMO: &[&str] = &[
    // three letters
    "bag", "bat", "bet", "big", "bit", "bog", "bot", "bug", "but", "cab", "cag", "can", "cap",
    "car", "cat", "cob", "cod", "cog", "con", "cop", "cot", "cub", "cup", "cut", "dab", "dig",
    "dog", "don", "dot", "dug", "fat", "fig", "fog", "fun", "gun", "hat", "hit", "hog", "hot",
    "hug", "hut", "log", "lot", "mat", "mop", "mug", "nap", "nut", "pan", "pat", "pig", "pin",
    "pit", "pot", "pun", "put", "rat", "rot", "rug", "run", "rut", "sat", "sun", "tan", "tap",
    "tin", "tip", "top", "tot", "tug", "van", "vat", "wig", "win", "wit",
    // four letters
    "bard", "bold", "bolt", "bond", "bore", "card", "care", "cold", "colt", "cord", "core",
    "corm", "dare", "fold", "ford", "fore", "gold", "hard", "hold", "lard", "mare", "mold",
    "more", "ward", "ware", "warm", "word", "wore", "work", "worm", "worn", "yard",
];

/// Number of words in [`DEMO`]
pub const DEMO_COUNT: usize = DEMO.len();
