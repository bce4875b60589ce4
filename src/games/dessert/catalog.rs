//! The dessert catalog: a fixed, ordered table of what the shop bakes.

/// Visual asset shown on the dessert button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DessertImage {
    Cupcake,
    Donut,
    Eclair,
    Froyo,
    Gingerbread,
    Honeycomb,
    IceCreamSandwich,
    Jellybean,
    KitKat,
    Lollipop,
    Marshmallow,
    Nougat,
    Oreo,
}

impl DessertImage {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            DessertImage::Cupcake => "Cupcake",
            DessertImage::Donut => "Donut",
            DessertImage::Eclair => "Eclair",
            DessertImage::Froyo => "Froyo",
            DessertImage::Gingerbread => "Gingerbread",
            DessertImage::Honeycomb => "Honeycomb",
            DessertImage::IceCreamSandwich => "Ice Cream Sandwich",
            DessertImage::Jellybean => "Jellybean",
            DessertImage::KitKat => "KitKat",
            DessertImage::Lollipop => "Lollipop",
            DessertImage::Marshmallow => "Marshmallow",
            DessertImage::Nougat => "Nougat",
            DessertImage::Oreo => "Oreo",
        }
    }

    /// 4-line art, every line 10 columns wide.
    pub fn art(&self) -> [&'static str; 4] {
        match self {
            DessertImage::Cupcake => ["   .,.    ", "  (~~~)   ", "  |||||   ", "  \\___/   "],
            DessertImage::Donut => ["  .-\"-.   ", " / (_) \\  ", " \\     /  ", "  '-.-'   "],
            DessertImage::Eclair => ["          ", " .~~~~~~. ", "(________)", "          "],
            DessertImage::Froyo => ["   (~)    ", "  (~~~)   ", "  \\   /   ", "   \\_/    "],
            DessertImage::Gingerbread => ["   (o)    ", "  --|--   ", "   / \\    ", "  '   '   "],
            DessertImage::Honeycomb => [" /\\_/\\_/\\ ", " \\_/ \\_/ /", " / \\_/ \\ \\", " \\_/ \\_/ /"],
            DessertImage::IceCreamSandwich => [" ________ ", "|________|", "|::::::::|", "|________|"],
            DessertImage::Jellybean => ["   .--.   ", "  (    )  ", "   )  (   ", "  (____)  "],
            DessertImage::KitKat => [" ________ ", "|_|_|_|_| ", "|_|_|_|_| ", "          "],
            DessertImage::Lollipop => ["   .-.    ", "  ( @ )   ", "   '-'    ", "    |     "],
            DessertImage::Marshmallow => ["  .----.  ", "  |    |  ", "  |    |  ", "  '----'  "],
            DessertImage::Nougat => [" ________ ", "|. o . o.|", "|o . o . |", "'--------'"],
            DessertImage::Oreo => ["  .----.  ", " (======) ", " (######) ", "  '----'  "],
        }
    }
}

/// One tier of the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dessert {
    pub image: DessertImage,
    /// Revenue per sale while this dessert is in production.
    pub price: u64,
    /// Cumulative sales needed before this dessert starts being produced.
    pub start_production_amount: u64,
}

const fn dessert(image: DessertImage, price: u64, start_production_amount: u64) -> Dessert {
    Dessert {
        image,
        price,
        start_production_amount,
    }
}

/// All desserts, sorted by `start_production_amount`. The first one starts at 0
/// and the thresholds are strictly increasing; `select_dessert` relies on both.
pub const ALL_DESSERTS: [Dessert; 13] = [
    dessert(DessertImage::Cupcake, 5, 0),
    dessert(DessertImage::Donut, 10, 5),
    dessert(DessertImage::Eclair, 15, 20),
    dessert(DessertImage::Froyo, 30, 50),
    dessert(DessertImage::Gingerbread, 50, 100),
    dessert(DessertImage::Honeycomb, 100, 200),
    dessert(DessertImage::IceCreamSandwich, 500, 500),
    dessert(DessertImage::Jellybean, 1000, 1000),
    dessert(DessertImage::KitKat, 2000, 2000),
    dessert(DessertImage::Lollipop, 3000, 4000),
    dessert(DessertImage::Marshmallow, 4000, 8000),
    dessert(DessertImage::Nougat, 5000, 16000),
    dessert(DessertImage::Oreo, 6000, 20000),
];

/// Index of the dessert in production after `desserts_sold` sales: the last
/// entry whose threshold has been reached.
pub fn select_dessert(desserts_sold: u64) -> usize {
    let mut selected = 0;
    for (i, d) in ALL_DESSERTS.iter().enumerate() {
        if desserts_sold >= d.start_production_amount {
            selected = i;
        } else {
            break;
        }
    }
    selected
}
