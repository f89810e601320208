//! Priced offerings with a menu: an interface contract (`Pricing`) plus shared
//! behavior (`HasMenu`) composed into unrelated types.

pub trait Pricing {
    fn price(&self) -> String;
}

/// Menu behavior. Implementors only expose their items; everything else comes
/// from the default methods.
pub trait HasMenu {
    fn menu_items(&self) -> &[String];

    fn menu(&self) -> Vec<&str> {
        self.menu_items().iter().map(String::as_str).collect()
    }

    fn has_item(&self, name: &str) -> bool {
        self.menu_items().iter().any(|item| item.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    menus: Vec<String>,
}

impl Movie {
    pub fn new() -> Self {
        Self {
            menus: vec!["Guardian Of the Galaxy".to_string(), "Iron Man".to_string()],
        }
    }
}

impl Default for Movie {
    fn default() -> Self {
        Self::new()
    }
}

impl HasMenu for Movie {
    fn menu_items(&self) -> &[String] {
        &self.menus
    }
}

impl Pricing for Movie {
    fn price(&self) -> String {
        "122 tk".to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Concert {
    menus: Vec<String>,
}

impl Concert {
    pub fn new() -> Self {
        Self {
            menus: vec!["Cocke".to_string(), "Chicken Grill".to_string()],
        }
    }
}

impl Default for Concert {
    fn default() -> Self {
        Self::new()
    }
}

impl HasMenu for Concert {
    fn menu_items(&self) -> &[String] {
        &self.menus
    }
}

impl Pricing for Concert {
    fn price(&self) -> String {
        "120 tk".to_string()
    }
}

pub fn describe_offering<T: Pricing + HasMenu>(offering: &T) -> String {
    format!("[{}] {}", offering.menu().join(", "), offering.price())
}
