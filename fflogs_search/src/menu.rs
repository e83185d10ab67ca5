//! Context-menu integration.
//!
//! When the host opens a right-click menu over a player it fires a
//! [`MenuOpened`] event at every subscribed [`MenuHandler`]. The
//! [`SearchMenuHandler`] answers with a "Search FFLogs" item for the addons
//! where a player name is available. Subscriptions are held by a
//! [`MenuRegistration`] guard that unsubscribes when dropped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::{Context, Result};
use fflogs_data::WorldId;
use log::{debug, info};

use crate::launcher::Launcher;
use crate::resolver::{Target, WorldResolver};

pub const MENU_ITEM_NAME: &str = "Search FFLogs";
pub const MENU_PREFIX_COLOR: u16 = 15;

/// Addons whose menus get a search entry. `None` is the in-world target menu.
pub const VALID_ADDONS: &[Option<&str>] = &[
    None,
    Some("PartyMemberList"),
    Some("FriendList"),
    Some("FreeCompany"),
    Some("LinkShell"),
    Some("CrossWorldLinkshell"),
    Some("_PartyList"),
    Some("ChatLog"),
    Some("LookingForGroup"),
    Some("BlackList"),
    Some("ContentMemberList"),
    Some("SocialList"),
    Some("ContactList"),
];

/// Icon glyph drawn before a menu item's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixIcon {
    BoxedLetterF,
}

/// The character a menu was opened over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuTarget {
    pub name: Option<String>,
    pub home_world: Option<WorldId>,
}

/// Event fired by the host when a context menu opens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuOpened {
    pub addon: Option<String>,
    pub target: Option<MenuTarget>,
}

/// A menu entry offered back to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub name: String,
    pub prefix: PrefixIcon,
    pub prefix_color: u16,
    pub target: Target,
}

impl MenuItem {
    /// Handle a click: resolve the target and open the result.
    ///
    /// # Errors
    /// Propagates launcher failures.
    pub fn click(&self, resolver: &WorldResolver<'_>, launcher: &dyn Launcher) -> Result<String> {
        let url = resolver.resolve(&self.target);
        info!("menu item \"{}\" clicked, opening {url}", self.name);
        launcher
            .open(&url)
            .with_context(|| format!("while opening {url} from the context menu"))?;
        Ok(url)
    }
}

pub trait MenuHandler {
    fn on_menu_opened(&self, event: &MenuOpened, items: &mut Vec<MenuItem>);
}

/// Offers the FFLogs search entry.
#[derive(Debug, Default)]
pub struct SearchMenuHandler;

impl MenuHandler for SearchMenuHandler {
    fn on_menu_opened(&self, event: &MenuOpened, items: &mut Vec<MenuItem>) {
        if !VALID_ADDONS.contains(&event.addon.as_deref()) {
            debug!("ignoring menu for addon {:?}", event.addon);
            return;
        }
        let Some(target) = &event.target else {
            return;
        };
        let Some(name) = target.name.as_deref().filter(|n| !n.trim().is_empty()) else {
            return;
        };
        items.push(MenuItem {
            name: MENU_ITEM_NAME.to_string(),
            prefix: PrefixIcon::BoxedLetterF,
            prefix_color: MENU_PREFIX_COLOR,
            target: Target::new(name, target.home_world),
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Something that fires menu events at subscribers.
pub trait MenuHost {
    fn subscribe(&self, handler: Rc<dyn MenuHandler>) -> SubscriptionId;
    /// Returns false if `id` was not subscribed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}

/// Keeps a handler subscribed for as long as it lives.
pub struct MenuRegistration<'h, H: MenuHost + ?Sized> {
    host: &'h H,
    id: SubscriptionId,
}

impl<'h, H: MenuHost + ?Sized> MenuRegistration<'h, H> {
    pub fn new(host: &'h H, handler: Rc<dyn MenuHandler>) -> Self {
        let id = host.subscribe(handler);
        debug!("menu handler subscribed as {id:?}");
        Self { host, id }
    }

    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl<H: MenuHost + ?Sized> Drop for MenuRegistration<'_, H> {
    fn drop(&mut self) {
        if self.host.unsubscribe(self.id) {
            debug!("menu handler {:?} unsubscribed", self.id);
        }
    }
}

/// Subscribe the FFLogs search entry to `host`.
pub fn register_search_menu<H: MenuHost + ?Sized>(host: &H) -> MenuRegistration<'_, H> {
    MenuRegistration::new(host, Rc::new(SearchMenuHandler))
}

/// In-process menu host that dispatches events to its subscribers in order.
#[derive(Default)]
pub struct MenuBus {
    handlers: RefCell<Vec<(SubscriptionId, Rc<dyn MenuHandler>)>>,
    next_id: Cell<u64>,
}

impl MenuBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }

    /// Fire `event` and collect the items every subscriber offers.
    pub fn open_menu(&self, event: &MenuOpened) -> Vec<MenuItem> {
        // snapshot so handlers may (un)subscribe while being called
        let handlers: Vec<Rc<dyn MenuHandler>> = self.handlers.borrow().iter().map(|(_, h)| Rc::clone(h)).collect();
        let mut items = Vec::new();
        for handler in handlers {
            handler.on_menu_opened(event, &mut items);
        }
        items
    }
}

impl MenuHost for MenuBus {
    fn subscribe(&self, handler: Rc<dyn MenuHandler>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.handlers.borrow_mut().push((id, handler));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|(sub, _)| *sub != id);
        handlers.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(addon: Option<&str>, name: Option<&str>, world: Option<WorldId>) -> MenuOpened {
        MenuOpened {
            addon: addon.map(str::to_string),
            target: Some(MenuTarget {
                name: name.map(str::to_string),
                home_world: world,
            }),
        }
    }

    #[test]
    fn offers_item_for_valid_addons() {
        let mut items = Vec::new();
        SearchMenuHandler.on_menu_opened(&event(Some("FriendList"), Some("Yda Hext"), Some(73)), &mut items);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, MENU_ITEM_NAME);
        assert_eq!(items[0].prefix, PrefixIcon::BoxedLetterF);
        assert_eq!(items[0].prefix_color, 15);
        assert_eq!(items[0].target, Target::new("Yda Hext", Some(73)));
    }

    #[test]
    fn world_target_menu_has_no_addon() {
        let mut items = Vec::new();
        SearchMenuHandler.on_menu_opened(&event(None, Some("Thancred"), None), &mut items);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn skips_unknown_addons_and_unnamed_targets() {
        let mut items = Vec::new();
        SearchMenuHandler.on_menu_opened(&event(Some("Inventory"), Some("Yda"), None), &mut items);
        SearchMenuHandler.on_menu_opened(&event(Some("ChatLog"), None, Some(73)), &mut items);
        SearchMenuHandler.on_menu_opened(&event(Some("ChatLog"), Some("  "), Some(73)), &mut items);
        SearchMenuHandler.on_menu_opened(
            &MenuOpened {
                addon: Some("ChatLog".into()),
                target: None,
            },
            &mut items,
        );
        assert!(items.is_empty());
    }

    #[test]
    fn registration_unsubscribes_on_drop() {
        let bus = MenuBus::new();
        {
            let _registration = register_search_menu(&bus);
            assert_eq!(bus.subscriber_count(), 1);
            assert_eq!(bus.open_menu(&event(Some("_PartyList"), Some("Yda"), None)).len(), 1);
        }
        assert_eq!(bus.subscriber_count(), 0);
        assert!(bus.open_menu(&event(Some("_PartyList"), Some("Yda"), None)).is_empty());
    }

    #[test]
    fn subscription_ids_are_distinct() {
        let bus = MenuBus::new();
        let a = register_search_menu(&bus);
        let b = register_search_menu(&bus);
        assert_ne!(a.id(), b.id());
        assert_eq!(bus.open_menu(&event(None, Some("Yda"), None)).len(), 2);
        drop(a);
        assert_eq!(bus.subscriber_count(), 1);
        assert!(!bus.unsubscribe(SubscriptionId(0)));
    }
}
