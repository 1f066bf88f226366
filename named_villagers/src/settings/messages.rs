//! User-facing message templates.

use super::ConfigStore;

/// Prefix used when `messages.prefix` is not configured.
pub const DEFAULT_MESSAGE_PREFIX: &str = "&8[&6NamedVillagers&8]&r ";

/// Message templates under the `messages` table, looked up by dotted path,
/// with colour codes translated and the shared prefix applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Messages {
    prefix: String,
    store: ConfigStore,
}

impl Messages {
    pub fn from_store(store: &ConfigStore) -> Self {
        Self {
            prefix: store.get_string("messages.prefix", DEFAULT_MESSAGE_PREFIX),
            store: store.clone(),
        }
    }

    /// The message at `messages.<path>`. Empty when missing; otherwise
    /// prefixed, except for the prefix itself.
    pub fn get(&self, path: &str) -> String {
        let message = if path == "prefix" {
            self.prefix.clone()
        } else {
            let template = self.store.get_string(&format!("messages.{path}"), "");
            if template.is_empty() {
                template
            } else {
                format!("{}{}", self.prefix, template)
            }
        };
        translate_color_codes(&message)
    }

    /// The message at `path` with `{name}` replaced by `name`.
    pub fn get_with_name(&self, path: &str, name: &str) -> String {
        self.get(path).replace("{name}", name)
    }
}

/// Replace `&` colour codes with the section sign the client renders.
pub fn translate_color_codes(message: &str) -> String {
    message.replace('&', "\u{a7}")
}
