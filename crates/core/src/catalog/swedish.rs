//! Swedish catalog labels. Position `n` in each table is catalog id `n + 1`.

pub(super) const CATEGORIES: &[&str] = &[
    "Kläder",
    "Skor",
    "Väskor",
    "Accessoarer",
    "Aftonklänning",
    "Bälte",
    "Blus",
    "Kaftan",
    "Cardigan",
    "Kappa",
    "Klänning",
    "Huvtröja",
    "Jeans",
    "Overall",
    "Stickat",
    "Läderjacka",
    "Underkläder",
    "Skjorta",
    "Shorts",
    "Kjol",
    "Kostym",
    "Tröja",
    "Badkläder",
    "Topp",
    "Trenchcoat",
    "Byxor",
    "T-shirt",
    "Väst",
    "Ankelstövlar",
    "Balettskor",
    "Stövlar",
    "Träskor",
    "Espadriller",
    "Platta skor",
    "Flip-flops",
    "Höga klackar",
    "Klackar",
    "Mellanklackar",
    "Mules",
    "Sandaler",
    "Skor (allmänt)",
    "Tofflor",
    "Sneakers",
    "Träningsskor",
    "Ryggsäck",
    "Bältesväska",
    "Aftonväska",
    "Axelremsväska",
    "Handväska",
    "Portmonnä",
    "Skolväska",
    "Skulderväska",
    "Resväska",
    "Shoppingväska",
    "Väska (övrig)",
    "Keps",
    "Handskar",
    "Näsdukar",
    "Hatt",
    "Halsduk",
    "Solglasögon",
    "Plånbok",
    "Klocka",
    "Accessoar (övrig)",
];

pub(super) const COLORS: &[&str] = &[
    "Akva",
    "Azur",
    "Beige",
    "Svart",
    "Blå",
    "Brons",
    "Brun",
    "Bourgogne",
    "Choklad",
    "Grädde",
    "Karmosin",
    "Korall",
    "Cyan",
    "Mörkblå",
    "Mörkröd",
    "Gylden",
    "Grå",
    "Grön",
    "Khaki",
    "Ljusblå",
    "Ljusgrön",
    "Lime",
    "Maroon",
    "Mint",
    "Senap",
    "Marinblå",
    "Oliv",
    "Orange",
    "Orkidé",
    "Rosa",
    "Lila",
    "Röd",
    "Laxrosa",
    "Silver",
    "Vårgrön",
    "Blågrön",
    "Turkos",
    "Violon",
    "Vetefärgad",
    "Vit",
    "Gul",
];

pub(super) const CONDITIONS: &[&str] = &[
    "Aldrig använd, med märke",
    "Aldrig använd",
    "Mycket bra",
    "Bra",
    "Rättvis",
];

pub(super) const MATERIALS: &[&str] = &[
    "Akryl",
    "Alpacka",
    "Bambu",
    "Canvas",
    "Kartong",
    "Kashmir",
    "Keramik",
    "Chiffong",
    "Manchestertyg",
    "Bomull",
    "Denim",
    "Dun",
    "Elastan",
    "Fuskpäls",
    "Konstläder",
    "Flanell",
    "Fleece",
    "Skum",
    "Päls",
    "Glas",
    "Guld",
    "Jute",
    "Spets",
    "Latex",
    "Läder",
    "Linne",
    "Merino",
    "Mesh",
    "Metall",
    "Mohair",
    "Neopren",
    "Nylon",
    "Papper",
    "Plast",
    "Polyester",
    "Porslin",
    "Gummi",
    "Satin",
    "Paljett",
    "Silikon",
    "Siden",
    "Silver",
    "Stål",
    "Sten",
    "Halm",
    "Tweed",
    "Velour",
    "Sammet",
    "Viskos",
    "Trä",
    "Ull",
];

pub(super) const PATTERNS: &[&str] = &[
    "Inget mönster",
    "Abstrakt",
    "Abstrakt akvarell",
    "Djurtryck",
    "Argyle",
    "Kamouflage",
    "Rutig",
    "Chevron",
    "Damask",
    "Blommig",
    "Galaxtryck",
    "Geometrisk",
    "Gingham",
    "Fiskbensmönster",
    "Hundtand",
    "Ikat",
    "Mosaik",
    "Ombre",
    "Paisley",
    "Prickar",
    "Seersucker",
    "Ränder",
    "Tartan",
    "Tie-dye",
    "Toile de Jouy",
    "Tribal",
];
