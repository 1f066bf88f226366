//! Command surface for reloading settings and naming the villager a player
//! is looking at.

use std::collections::HashSet;

use village_rules::{EntityId, EntityKind, Vec3, WorldState};

use crate::generator::NameSource;
use crate::runtime::NamedVillagers;

/// Maximum distance, in blocks, at which a player can target a villager.
pub const TARGET_RANGE: f64 = 5.0;

/// Subcommands offered by tab completion.
pub const SUBCOMMANDS: [&str; 2] = ["random", "reload"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    Reload,
    Rename,
}

impl Permission {
    pub fn node(&self) -> &'static str {
        match self {
            Permission::Reload => "namedvillagers.reload",
            Permission::Rename => "namedvillagers.rename",
        }
    }
}

/// Where a command came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SenderKind {
    Console,
    /// A player, with their eye position and look direction.
    Player { eye: Vec3, direction: Vec3 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandSender {
    pub kind: SenderKind,
    pub permissions: HashSet<Permission>,
    pub operator: bool,
}

impl CommandSender {
    pub fn console() -> Self {
        Self {
            kind: SenderKind::Console,
            permissions: HashSet::new(),
            operator: true,
        }
    }

    pub fn player(eye: Vec3, direction: Vec3) -> Self {
        Self {
            kind: SenderKind::Player { eye, direction },
            permissions: HashSet::new(),
            operator: false,
        }
    }

    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permissions.insert(permission);
        self
    }

    pub fn with_operator(mut self, operator: bool) -> Self {
        self.operator = operator;
        self
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self.kind, SenderKind::Player { .. })
    }

    /// Console and operators hold every permission.
    pub fn has_permission(&self, permission: Permission) -> bool {
        matches!(self.kind, SenderKind::Console)
            || self.operator
            || self.permissions.contains(&permission)
    }

    /// The villager this sender is looking at, if any.
    pub fn target_villager(&self, world: &WorldState) -> Option<EntityId> {
        let SenderKind::Player { eye, direction } = self.kind else {
            return None;
        };
        world.ray_trace(eye, direction, TARGET_RANGE, |e| e.kind == EntityKind::Villager)
    }
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamingCommand {
    Usage,
    Reload,
    Random,
    /// Apply this literal name.
    Rename(String),
}

impl NamingCommand {
    pub fn parse(args: &[&str], interactive: bool) -> Self {
        let Some(first) = args.first() else {
            return NamingCommand::Usage;
        };
        if first.eq_ignore_ascii_case("reload") {
            NamingCommand::Reload
        } else if !interactive {
            NamingCommand::Usage
        } else if first.eq_ignore_ascii_case("random") {
            NamingCommand::Random
        } else {
            NamingCommand::Rename(args.join(" "))
        }
    }

    pub fn permission(&self) -> Option<Permission> {
        match self {
            NamingCommand::Usage => None,
            NamingCommand::Reload => Some(Permission::Reload),
            NamingCommand::Random | NamingCommand::Rename(_) => Some(Permission::Rename),
        }
    }
}

/// Completions for the argument being typed. Only the first argument
/// completes.
pub fn tab_complete(args: &[&str]) -> Vec<String> {
    let [typed] = args else {
        return Vec::new();
    };
    let typed = typed.to_lowercase();
    SUBCOMMANDS
        .iter()
        .filter(|sub| sub.starts_with(&typed))
        .map(|sub| sub.to_string())
        .collect()
}

impl<S: NameSource> NamedVillagers<S> {
    /// Run a command and return the replies for the sender.
    pub fn run_command(
        &mut self,
        sender: &CommandSender,
        args: &[&str],
        world: &mut WorldState,
    ) -> Vec<String> {
        let command = NamingCommand::parse(args, sender.is_interactive());
        if let Some(permission) = command.permission() {
            if !sender.has_permission(permission) {
                return self.reply("no-permission");
            }
        }

        match command {
            NamingCommand::Usage => self.reply("invalid-usage"),
            NamingCommand::Reload => match self.reload() {
                Ok(()) => self.reply("config-reloaded"),
                Err(_) => self.reply("reload-failed"),
            },
            NamingCommand::Random => {
                let Some(target) = sender.target_villager(world) else {
                    return self.reply("not-looking-at-villager");
                };
                match self.coordinator_mut().name_randomly(world, target) {
                    Some(name) => self.reply_with_name("villager-random-named", &name),
                    None => self.reply("not-looking-at-villager"),
                }
            }
            NamingCommand::Rename(name) => {
                let Some(target) = sender.target_villager(world) else {
                    return self.reply("not-looking-at-villager");
                };
                if self.coordinator_mut().rename(world, target, &name) {
                    self.reply_with_name("villager-renamed", &name)
                } else {
                    self.reply("not-looking-at-villager")
                }
            }
        }
    }

    pub fn tab_complete(&self, args: &[&str]) -> Vec<String> {
        tab_complete(args)
    }

    fn reply(&self, path: &str) -> Vec<String> {
        non_empty(self.messages().get(path))
    }

    fn reply_with_name(&self, path: &str, name: &str) -> Vec<String> {
        non_empty(self.messages().get_with_name(path, name))
    }
}

fn non_empty(message: String) -> Vec<String> {
    if message.is_empty() {
        Vec::new()
    } else {
        vec![message]
    }
}
