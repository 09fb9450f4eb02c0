//! Static lookup tables used by the perfection counter
//!
//! Item ids follow the game's object ids. Fish ids are stored qualified
//! (`(O)128`), shipping ids unqualified (`24`), matching how each dictionary
//! is keyed in a current save.

/// Fish that count toward "Fish Caught"
pub const FISH: &[&str] = &[
    // Ocean
    "(O)128", "(O)129", "(O)130", "(O)131", "(O)146", "(O)147", "(O)148", "(O)149",
    "(O)150", "(O)151", "(O)154", "(O)155", "(O)267", "(O)701", "(O)705", "(O)708",
    // Rivers and lakes
    "(O)132", "(O)136", "(O)137", "(O)138", "(O)139", "(O)140", "(O)141", "(O)142",
    "(O)143", "(O)144", "(O)145", "(O)269", "(O)698", "(O)699", "(O)700", "(O)702",
    "(O)704", "(O)706", "(O)707", "(O)734", "(O)Goby",
    // Mines, desert, sewers, swamp
    "(O)156", "(O)158", "(O)161", "(O)162", "(O)164", "(O)165", "(O)795", "(O)796",
    // Night market
    "(O)798", "(O)799", "(O)800",
    // Ginger Island
    "(O)836", "(O)837", "(O)838",
    // Legendaries
    "(O)159", "(O)160", "(O)163", "(O)682", "(O)775",
    "(O)898", "(O)899", "(O)900", "(O)901", "(O)902",
    // Crab pot
    "(O)372", "(O)715", "(O)716", "(O)717", "(O)718", "(O)719", "(O)720", "(O)721",
    "(O)722", "(O)723",
];

/// Items that count toward "Shipped Items" (the shipping collection)
pub const SHIPPING: &[&str] = &[
    // Forage
    "16", "18", "20", "22", "78", "88", "90", "91", "92", "152", "153", "157", "257",
    "259", "281", "283", "296", "372", "392", "393", "394", "396", "397", "399", "402",
    "404", "406", "408", "410", "412", "414", "416", "418", "420", "422", "829", "851",
    "Moss",
    // Crops
    "24", "188", "190", "192", "248", "250", "252", "254", "256", "258", "260", "262",
    "264", "266", "268", "270", "271", "272", "274", "276", "278", "280", "282", "284",
    "300", "304", "376", "398", "400", "417", "421", "433", "454", "591", "593", "595",
    "597", "815", "830", "832", "Carrot", "SummerSquash", "Broccoli", "Powdermelon",
    // Fruit trees
    "613", "634", "635", "636", "637", "638", "834",
    // Animal products
    "107", "174", "176", "180", "182", "184", "186", "305", "430", "436", "438", "440",
    "442", "444", "446", "928",
    // Artisan goods
    "303", "306", "307", "308", "340", "342", "344", "346", "348", "350", "395", "424",
    "426", "428", "432", "445", "447", "459", "614", "724", "725", "726", "807", "812",
    "814",
    // Cooking ingredients
    "245", "246", "247", "419", "423",
    // Resources and monster loot
    "330", "378", "380", "382", "384", "386", "388", "390", "684", "709", "766", "767",
    "768", "769", "771", "848", "881",
];

/// Villagers that can be dated; maxed at 8 hearts
pub const DATABLE_VILLAGERS: &[&str] = &[
    "Abigail", "Alex", "Elliott", "Emily", "Haley", "Harvey", "Leah", "Maru", "Penny",
    "Sam", "Sebastian", "Shane",
];

/// Everyone else; maxed at 10 hearts
pub const NON_DATABLE_VILLAGERS: &[&str] = &[
    "Caroline", "Clint", "Demetrius", "Dwarf", "Evelyn", "George", "Gus", "Jas", "Jodi",
    "Kent", "Krobus", "Leo", "Lewis", "Linus", "Marnie", "Pam", "Pierre", "Robin",
    "Sandy", "Vincent", "Willy", "Wizard",
];

/// Mail flags set when each stardrop is obtained
pub const STARDROP_MAIL: &[&str] = &[
    "CF_Fair",
    "CF_Mines",
    "CF_Spouse",
    "CF_Sewer",
    "CF_Statue",
    "CF_Fish",
    "museumComplete",
];

/// One Adventurer's Guild eradication goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EradicationGoal {
    pub name: &'static str,
    /// Kill-stat keys that count toward the goal
    pub monsters: &'static [&'static str],
    pub quota: i64,
}

pub const ERADICATION_GOALS: &[EradicationGoal] = &[
    EradicationGoal {
        name: "Slimes",
        monsters: &["Green Slime", "Frost Jelly", "Sludge", "Tiger Slime"],
        quota: 1000,
    },
    EradicationGoal {
        name: "Void Spirits",
        monsters: &["Shadow Shaman", "Shadow Brute", "Shadow Sniper"],
        quota: 150,
    },
    EradicationGoal {
        name: "Bats",
        monsters: &["Bat", "Frost Bat", "Lava Bat", "Iridium Bat"],
        quota: 200,
    },
    EradicationGoal {
        name: "Skeletons",
        monsters: &["Skeleton", "Skeleton Mage"],
        quota: 50,
    },
    EradicationGoal {
        name: "Cave Insects",
        monsters: &["Bug", "Cave Fly", "Grub", "Mutant Fly", "Mutant Grub", "Armored Bug"],
        quota: 80,
    },
    EradicationGoal {
        name: "Duggies",
        monsters: &["Duggy", "Magma Duggy"],
        quota: 30,
    },
    EradicationGoal {
        name: "Dust Sprites",
        monsters: &["Dust Spirit"],
        quota: 500,
    },
    EradicationGoal {
        name: "Rock Crabs",
        monsters: &["Rock Crab", "Lava Crab", "Iridium Crab"],
        quota: 60,
    },
    EradicationGoal {
        name: "Mummies",
        monsters: &["Mummy"],
        quota: 100,
    },
    EradicationGoal {
        name: "Pepper Rex",
        monsters: &["Pepper Rex"],
        quota: 50,
    },
    EradicationGoal {
        name: "Serpents",
        monsters: &["Serpent", "Royal Serpent"],
        quota: 250,
    },
    EradicationGoal {
        name: "Magma Sprites",
        monsters: &["Magma Sprite", "Magma Sparker"],
        quota: 150,
    },
];
