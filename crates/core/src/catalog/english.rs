//! English catalog labels. Position `n` in each table is catalog id `n + 1`.

pub(super) const CATEGORIES: &[&str] = &[
    "Clothing",
    "Shoes",
    "Bags",
    "Accessories",
    "Evening Dress",
    "Belt",
    "Blouse",
    "Kaftan",
    "Cardigan",
    "Coat",
    "Dress",
    "Hoodie",
    "Jeans",
    "Jumpsuit",
    "Knitwear",
    "Leather Jacket",
    "Lingerie",
    "Shirt",
    "Shorts",
    "Skirt",
    "Suit",
    "Sweater",
    "Swimwear",
    "Top",
    "Trench Coat",
    "Trousers",
    "T-shirt",
    "Vest",
    "Ankle Boots",
    "Ballet Flats",
    "Boots",
    "Clogs",
    "Espadrilles",
    "Flat Shoes",
    "Flip-flops",
    "High Heels",
    "Heels",
    "Mid Heels",
    "Mules",
    "Sandals",
    "Shoes (General)",
    "Slippers",
    "Sneakers",
    "Trainers",
    "Backpack",
    "Belt Bag",
    "Clutch",
    "Crossbody Bag",
    "Handbag",
    "Purse",
    "Satchel",
    "Shoulder Bag",
    "Suitcase",
    "Tote Bag",
    "Bag (Other)",
    "Cap",
    "Gloves",
    "Handkerchiefs",
    "Hat",
    "Scarf",
    "Sunglasses",
    "Wallet",
    "Watch",
    "Accessory (Other)",
];

pub(super) const COLORS: &[&str] = &[
    "Aqua",
    "Azure",
    "Beige",
    "Black",
    "Blue",
    "Bronze",
    "Brown",
    "Burgundy",
    "Chocolate",
    "Cream",
    "Crimson",
    "Coral",
    "Cyan",
    "Dark Blue",
    "Dark Red",
    "Gold",
    "Gray",
    "Green",
    "Khaki",
    "Light Blue",
    "Light Green",
    "Lime",
    "Maroon",
    "Mint",
    "Mustard",
    "Navy",
    "Olive",
    "Orange",
    "Orchid",
    "Pink",
    "Purple",
    "Red",
    "Salmon",
    "Silver",
    "Spring Green",
    "Teal",
    "Turquoise",
    "Violet",
    "Wheat",
    "White",
    "Yellow",
];

pub(super) const CONDITIONS: &[&str] = &[
    "New with tags",
    "New without tags",
    "Very good",
    "Good",
    "Satisfactory",
];

pub(super) const MATERIALS: &[&str] = &[
    "Acrylic",
    "Alpaca",
    "Bamboo",
    "Canvas",
    "Cardboard",
    "Cashmere",
    "Ceramic",
    "Chiffon",
    "Corduroy",
    "Cotton",
    "Denim",
    "Down",
    "Elastane",
    "Faux Fur",
    "Faux Leather",
    "Flannel",
    "Fleece",
    "Foam",
    "Fur",
    "Glass",
    "Gold",
    "Jute",
    "Lace",
    "Latex",
    "Leather",
    "Linen",
    "Merino",
    "Mesh",
    "Metal",
    "Mohair",
    "Neoprene",
    "Nylon",
    "Paper",
    "Plastic",
    "Polyester",
    "Porcelain",
    "Rubber",
    "Satin",
    "Sequin",
    "Silicone",
    "Silk",
    "Silver",
    "Steel",
    "Stone",
    "Straw",
    "Tweed",
    "Velour",
    "Velvet",
    "Viscose",
    "Wood",
    "Wool",
];

pub(super) const PATTERNS: &[&str] = &[
    "No pattern",
    "Abstract",
    "Abstract watercolor",
    "Animal print",
    "Argyle",
    "Camouflage",
    "Check",
    "Chevron",
    "Damask",
    "Floral",
    "Galaxy print",
    "Geometric",
    "Gingham",
    "Herringbone",
    "Houndstooth",
    "Ikat",
    "Mosaic",
    "Ombre",
    "Paisley",
    "Polka dots",
    "Seersucker",
    "Stripes",
    "Tartan",
    "Tie-dye",
    "Toile de Jouy",
    "Tribal",
];
