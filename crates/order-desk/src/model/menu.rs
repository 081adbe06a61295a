use serde::{Deserialize, Serialize};
use std::fmt;

/// A dated selection of foods.
///
/// # References
/// `foods` holds food ids, not copies. Every id must name an available food when the menu is
/// created or updated, but deleting a food afterwards leaves the id in place; readers resolve
/// it with [`MenuStore::resolve_foods`](crate::menu_store::MenuStore::resolve_foods) and get
/// [`ResolvedFood::Missing`](crate::menu_store::ResolvedFood::Missing) for ids that no longer
/// exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    pub id: i32,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Food ids in the order they were given. Duplicates are kept.
    pub foods: Vec<i32>,
}

impl Menu {
    pub fn food_count(&self) -> usize {
        self.foods.len()
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ID={}, Date={}, Foods={}]",
            self.id,
            self.date,
            self.food_count()
        )
    }
}

/// Payload for creating a menu. An update replaces date and food list together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCreate {
    pub date: String,
    pub foods: Vec<i32>,
}

impl MenuCreate {
    pub fn new(date: impl Into<String>, foods: Vec<i32>) -> Self {
        Self {
            date: date.into(),
            foods,
        }
    }
}

pub type MenuUpdate = MenuCreate;
