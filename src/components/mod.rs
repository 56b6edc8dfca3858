mod navigation;
mod publish;
mod settings;

pub use navigation::NavigationBar;
pub use publish::PublishScreen;
pub use settings::SettingsScreen;
