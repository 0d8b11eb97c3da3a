//! Fixed domain tables: relevance keywords and canned material definitions.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

const KEYWORD_LIST: &[&str] = &[
    "mdf",
    "hdhmr",
    "wood",
    "particle",
    "board",
    "boilo",
    "plywood",
    "timber",
    "material",
    "furniture",
    "cabinet",
    "door",
    "panel",
    "wardrobe",
    "kitchen",
    "moisture",
    "resistance",
    "density",
    "termite",
    "borer",
    "action",
    "tesa",
];

static MATERIAL_KEYWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| KEYWORD_LIST.iter().copied().collect());

/// Whether a normalized word is a domain term that earns a relevance boost.
pub fn is_material_keyword(word: &str) -> bool {
    MATERIAL_KEYWORDS.contains(word)
}

#[derive(Debug, Clone, Copy)]
pub struct MaterialDefinition {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub price_range: &'static str,
    /// Out of 5.
    pub durability: u8,
    pub moisture_resistance: &'static str,
    pub recommended_uses: &'static [&'static str],
    pub note: &'static str,
}

pub static MATERIAL_DEFINITIONS: &[MaterialDefinition] = &[
    MaterialDefinition {
        key: "mdf",
        title: "MDF (Medium Density Fiberboard)",
        description: "A high-grade, composite wood product made from wood fibers, glued under high temperature and pressure.",
        features: &[
            "Smooth, flat surface ideal for painting and laminating",
            "Consistent density throughout the board",
            "Excellent machinability for detailed work",
            "No grain pattern, reducing waste in cutting",
        ],
        price_range: "Moderate (₹30-40 per sq ft)",
        durability: 4,
        moisture_resistance: "Low to Moderate",
        recommended_uses: &["Interior furniture", "Cabinets", "Decorative panels", "Wall units"],
        note: "Perfect for furniture, cabinetry, and interior design applications",
    },
    MaterialDefinition {
        key: "particle board",
        title: "Particle Board",
        description: "An engineered wood product manufactured from wood particles, chips, and sawmill shavings, bonded with synthetic resin.",
        features: &[
            "Cost-effective solution for furniture",
            "Uniform density and stability",
            "Good screw-holding capacity",
            "Environmentally friendly - uses recycled wood materials",
        ],
        price_range: "Economic (₹25-35 per sq ft)",
        durability: 3,
        moisture_resistance: "Low",
        recommended_uses: &["Budget furniture", "Shelving", "Office furniture", "Temporary installations"],
        note: "Ideal for interior furniture and non-structural applications",
    },
    MaterialDefinition {
        key: "hdhmr",
        title: "HDHMR (High Density High Moisture Resistant)",
        description: "Advanced engineered wood with enhanced density and moisture resistance properties.",
        features: &[
            "Superior moisture resistance",
            "High density for better strength",
            "Excellent screw holding capacity",
            "Suitable for high humidity areas",
        ],
        price_range: "Premium (₹45-60 per sq ft)",
        durability: 5,
        moisture_resistance: "High",
        recommended_uses: &["Kitchen cabinets", "Bathroom furniture", "Laboratory furniture", "Commercial installations"],
        note: "Recommended for kitchen cabinets and bathroom furniture",
    },
    MaterialDefinition {
        key: "boilo",
        title: "BOILO",
        description: "A specialized wood product designed for exterior and high-moisture applications.",
        features: &[
            "100% boiling water resistant",
            "Weather-proof properties",
            "High structural stability",
            "Long-lasting durability",
        ],
        price_range: "Premium Plus (₹55-70 per sq ft)",
        durability: 5,
        moisture_resistance: "Very High",
        recommended_uses: &["Exterior furniture", "Marine applications", "Outdoor installations", "Industrial use"],
        note: "Perfect for exterior applications and wet areas",
    },
];

impl MaterialDefinition {
    pub fn durability_stars(&self) -> String {
        let filled = usize::from(self.durability.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }
}

impl fmt::Display for MaterialDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", self.description)?;
        for feature in self.features {
            writeln!(f, "- {feature}")?;
        }
        writeln!(f, "Price Range: {}", self.price_range)?;
        writeln!(f, "Durability: {}", self.durability_stars())?;
        writeln!(f, "Moisture Resistance: {}", self.moisture_resistance)?;
        writeln!(f, "Recommended Uses: {}", self.recommended_uses.join(", "))?;
        write!(f, "{}", self.note)
    }
}

static COMPARISON_RESPONSE: LazyLock<String> = LazyLock::new(|| {
    let mut out = String::from("Here is how our materials compare:\n");
    for definition in MATERIAL_DEFINITIONS {
        out.push('\n');
        out.push_str(&definition.to_string());
        out.push('\n');
    }
    out
});

/// Canned multi-material definition text returned for comparison questions.
pub fn comparison_response() -> &'static str {
    COMPARISON_RESPONSE.as_str()
}
