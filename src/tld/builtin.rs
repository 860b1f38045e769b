//! Compiled-in TLD list (ASCII subset of the IANA root zone)

/// Country-code, generic and sponsored TLDs, ccTLDs first
pub const BUILTIN_TLDS: &[&str] = &[
    // Country codes
    "ac", "ad", "ae", "af", "ag", "ai", "al", "am", "ao", "aq", "ar", "as", "at", "au", "aw",
    "ax", "az", "ba", "bb", "bd", "be", "bf", "bg", "bh", "bi", "bj", "bm", "bn", "bo", "br",
    "bs", "bt", "bv", "bw", "by", "bz", "ca", "cc", "cd", "cf", "cg", "ch", "ci", "ck", "cl",
    "cm", "cn", "co", "cr", "cu", "cv", "cw", "cx", "cy", "cz", "de", "dj", "dk", "dm", "do",
    "dz", "ec", "ee", "eg", "er", "es", "et", "eu", "fi", "fj", "fk", "fm", "fo", "fr", "ga",
    "gb", "gd", "ge", "gf", "gg", "gh", "gi", "gl", "gm", "gn", "gp", "gq", "gr", "gs", "gt",
    "gu", "gw", "gy", "hk", "hm", "hn", "hr", "ht", "hu", "id", "ie", "il", "im", "in", "io",
    "iq", "ir", "is", "it", "je", "jm", "jo", "jp", "ke", "kg", "kh", "ki", "km", "kn", "kp",
    "kr", "kw", "ky", "kz", "la", "lb", "lc", "li", "lk", "lr", "ls", "lt", "lu", "lv", "ly",
    "ma", "mc", "md", "me", "mg", "mh", "mk", "ml", "mm", "mn", "mo", "mp", "mq", "mr", "ms",
    "mt", "mu", "mv", "mw", "mx", "my", "mz", "na", "nc", "ne", "nf", "ng", "ni", "nl", "no",
    "np", "nr", "nu", "nz", "om", "pa", "pe", "pf", "pg", "ph", "pk", "pl", "pm", "pn", "pr",
    "ps", "pt", "pw", "py", "qa", "re", "ro", "rs", "ru", "rw", "sa", "sb", "sc", "sd", "se",
    "sg", "sh", "si", "sj", "sk", "sl", "sm", "sn", "so", "sr", "ss", "st", "su", "sv", "sx",
    "sy", "sz", "tc", "td", "tf", "tg", "th", "tj", "tk", "tl", "tm", "tn", "to", "tr", "tt",
    "tv", "tw", "tz", "ua", "ug", "uk", "us", "uy", "uz", "va", "vc", "ve", "vg", "vi", "vn",
    "vu", "wf", "ws", "ye", "yt", "za", "zm", "zw",
    // Generic
    "com", "net", "org", "info", "biz", "name", "pro", "xyz", "top", "app", "dev", "page",
    "new", "foo", "zip", "mov", "ing", "bot", "lol", "mom", "moe", "win", "vip", "fun", "ink",
    "bar", "run", "art", "fit", "fan", "one", "ltd", "bio", "eco", "gay", "kim", "men", "red",
    "soy", "tax", "wtf", "academy", "agency", "band", "beer", "best", "bike", "black", "blog",
    "blue", "build", "buzz", "cafe", "camp", "capital", "care", "cash", "center", "chat",
    "city", "click", "cloud", "club", "codes", "coffee", "company", "cool", "deals", "design",
    "digital", "direct", "email", "energy", "expert", "express", "farm", "fashion", "finance",
    "fund", "games", "garden", "gift", "gold", "golf", "group", "guru", "health", "help",
    "host", "house", "land", "life", "link", "live", "love", "market", "media", "menu",
    "money", "movie", "network", "news", "ninja", "online", "party", "photo", "photos",
    "pics", "pink", "pizza", "plus", "press", "rocks", "sale", "school", "science",
    "services", "shoes", "shop", "show", "site", "social", "software", "solutions", "space",
    "store", "studio", "style", "sucks", "systems", "team", "tech", "technology", "today",
    "tools", "town", "toys", "trade", "vision", "wiki", "work", "works", "world", "zone",
    // Sponsored
    "aero", "asia", "cat", "coop", "edu", "gov", "int", "jobs", "mil", "museum", "post",
    "tel", "travel", "xxx",
];
