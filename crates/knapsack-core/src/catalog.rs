/// Lowest playable level
pub const MIN_LEVEL: u8 = 1;
/// Weight budget for level 1
pub const BASE_CAPACITY: u32 = 7;
/// Capacity gained per level beyond level 1
pub const CAPACITY_STEP: u32 = 3;

/// An item the player can pack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub weight: u32,
    pub value: u64,
}

impl Item {
    pub fn new(name: &str, weight: u32, value: u64) -> Self {
        Self {
            name: name.to_string(),
            weight,
            value,
        }
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (W:{}, V:{})", self.name, self.weight, self.value)
    }
}

/// Errors raised while validating a catalog definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A catalog needs at least one level
    NoLevels,
    /// A level has no items
    EmptyLevel(u8),
    /// An item weight of zero is not allowed in catalog data
    NonPositiveWeight { level: u8, index: usize },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoLevels => write!(f, "catalog has no levels"),
            Self::EmptyLevel(level) => write!(f, "level {} has no items", level),
            Self::NonPositiveWeight { level, index } => {
                write!(f, "level {} item {} has zero weight", level, index)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// The level catalog: an ordered item list per level, levels numbered
/// contiguously from [`MIN_LEVEL`]. Capacity is derived, not stored:
/// level 1 starts at [`BASE_CAPACITY`] and each further level adds
/// [`CAPACITY_STEP`].
#[derive(Debug, Clone)]
pub struct Catalog {
    levels: Vec<Vec<Item>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The three built-in quest levels
    pub fn builtin() -> Self {
        Self {
            levels: vec![
                vec![
                    Item::new("Gold Coin", 3, 60),
                    Item::new("Silver Coin", 2, 40),
                    Item::new("Magic Potion", 4, 100),
                    Item::new("Gem", 1, 20),
                    Item::new("Scroll", 5, 120),
                ],
                vec![
                    Item::new("Helmet", 4, 70),
                    Item::new("Armor", 6, 130),
                    Item::new("Boots", 3, 50),
                    Item::new("Sword", 5, 110),
                    Item::new("Ring", 1, 30),
                ],
                vec![
                    Item::new("Relic", 7, 150),
                    Item::new("Talisman", 2, 45),
                    Item::new("Crystal", 5, 90),
                    Item::new("Ancient Book", 6, 120),
                    Item::new("Map", 1, 25),
                ],
            ],
        }
    }

    /// Build a catalog from custom level data, validating the catalog
    /// contract: at least one level, every level non-empty, every item
    /// with positive weight.
    pub fn from_levels(levels: Vec<Vec<Item>>) -> Result<Self, CatalogError> {
        if levels.is_empty() {
            return Err(CatalogError::NoLevels);
        }
        for (i, items) in levels.iter().enumerate() {
            let level = MIN_LEVEL + i as u8;
            if items.is_empty() {
                return Err(CatalogError::EmptyLevel(level));
            }
            if let Some(index) = items.iter().position(|item| item.weight == 0) {
                return Err(CatalogError::NonPositiveWeight { level, index });
            }
        }
        Ok(Self { levels })
    }

    /// Highest playable level
    pub fn max_level(&self) -> u8 {
        MIN_LEVEL + (self.levels.len() - 1) as u8
    }

    /// Whether `level` names a level in this catalog
    pub fn contains(&self, level: u8) -> bool {
        (MIN_LEVEL..=self.max_level()).contains(&level)
    }

    /// Items for a level, `None` if the level is out of range
    pub fn items(&self, level: u8) -> Option<&[Item]> {
        if self.contains(level) {
            Some(&self.levels[(level - MIN_LEVEL) as usize])
        } else {
            None
        }
    }

    /// Weight budget for a level
    pub fn capacity_for(&self, level: u8) -> u32 {
        BASE_CAPACITY + CAPACITY_STEP * (level.saturating_sub(MIN_LEVEL)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_three_levels_of_five_items() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.max_level(), 3);
        for level in 1..=3 {
            assert_eq!(catalog.items(level).unwrap().len(), 5);
        }
        assert!(catalog.items(0).is_none());
        assert!(catalog.items(4).is_none());
    }

    #[test]
    fn capacity_grows_by_step() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.capacity_for(1), 7);
        assert_eq!(catalog.capacity_for(2), 10);
        assert_eq!(catalog.capacity_for(3), 13);
    }

    #[test]
    fn builtin_weights_are_positive() {
        let catalog = Catalog::builtin();
        for level in 1..=catalog.max_level() {
            for item in catalog.items(level).unwrap() {
                assert!(item.weight > 0, "{} has zero weight", item.name);
            }
        }
    }

    #[test]
    fn from_levels_rejects_bad_data() {
        assert_eq!(
            Catalog::from_levels(vec![]).unwrap_err(),
            CatalogError::NoLevels
        );
        assert_eq!(
            Catalog::from_levels(vec![vec![]]).unwrap_err(),
            CatalogError::EmptyLevel(1)
        );
        assert_eq!(
            Catalog::from_levels(vec![vec![Item::new("Feather", 0, 5)]]).unwrap_err(),
            CatalogError::NonPositiveWeight { level: 1, index: 0 }
        );
    }

    #[test]
    fn from_levels_accepts_valid_data() {
        let catalog =
            Catalog::from_levels(vec![vec![Item::new("Rock", 2, 0)]]).expect("valid catalog");
        assert_eq!(catalog.max_level(), 1);
        assert_eq!(catalog.items(1).unwrap()[0].name, "Rock");
    }
}
