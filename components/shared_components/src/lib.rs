use bevy::prelude::*;

pub struct SharedComponentsPlugin;

impl Plugin for SharedComponentsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<DisplayName>();
    }
}

/// Marker for entities that should be included in save files.
/// Add `#[require(IncludeInSave)]` to root components like GardenItem.
#[derive(Component, Default)]
pub struct IncludeInSave;

#[derive(Component, Reflect, Default, Debug, Clone, PartialEq, Deref, DerefMut)]
#[reflect(Component, Default)]
pub struct DisplayName(pub String);

impl From<&str> for DisplayName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for DisplayName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_deref() {
        let name = DisplayName("Moonpetal Rose".to_string());
        assert_eq!(*name, "Moonpetal Rose");
    }
}
