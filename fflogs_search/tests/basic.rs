use std::cell::RefCell;

use fflogs_search as ffs;
use ffs::handlers::{CommandOutcome, run_slash};
use ffs::*;
use url::Url;

#[derive(Default)]
struct Recorder {
    opened: RefCell<Vec<String>>,
}

impl Launcher for Recorder {
    fn open(&self, url: &str) -> Result<(), LaunchError> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

const AWKWARD_NAMES: &[&str] = &["Yda Hext", "A&B", "J'ahi Tia", "Plus+Sign", "50% Off", "Question? Mark#", "Élise Deux"];

#[test]
fn test_documented_examples() {
    let table = WorldTable::north_america();
    let resolver = WorldResolver::new(&table);
    assert_eq!(
        resolver.resolve(&Target::new("Yda Hext", Some(73))),
        "https://www.fflogs.com/character/na/adamantoise/Yda%20Hext"
    );
    assert_eq!(
        resolver.resolve(&Target::new("A&B", Some(999))),
        "https://www.fflogs.com/search/?term=A%26B"
    );
    assert_eq!(
        resolver.resolve(&Target::named("Test")),
        "https://www.fflogs.com/search/?term=Test"
    );
}

#[test]
fn test_every_known_world_resolves_to_its_profile() {
    let table = WorldTable::north_america();
    let resolver = WorldResolver::new(&table);
    for world in table.iter() {
        let url = resolver.resolve(&Target::new("Yda Hext", Some(world.world_id)));
        assert_eq!(
            url,
            format!("https://www.fflogs.com/character/na/{}/Yda%20Hext", world.slug)
        );
    }
}

#[test]
fn test_unknown_worlds_never_carry_a_slug() {
    let table = WorldTable::north_america();
    let resolver = WorldResolver::new(&table);
    for id in [0, 1, 72, 100, 403, 412, u32::MAX] {
        let url = resolver.resolve(&Target::new("Yda Hext", Some(id)));
        assert_eq!(url, "https://www.fflogs.com/search/?term=Yda%20Hext");
        assert!(table.iter().all(|w| !url.contains(&w.slug)));
    }
}

#[test]
fn test_profile_names_decode_to_original() {
    let table = WorldTable::north_america();
    let resolver = WorldResolver::new(&table);
    for name in AWKWARD_NAMES {
        let url = Url::parse(&resolver.resolve(&Target::new(*name, Some(91)))).unwrap();
        let last = url.path_segments().unwrap().last().unwrap().to_string();
        let decoded = percent_encoding::percent_decode_str(&last).decode_utf8().unwrap();
        assert_eq!(decoded, *name);
        assert_eq!(url.path_segments().unwrap().count(), 4);
    }
}

#[test]
fn test_search_terms_decode_to_original() {
    let table = WorldTable::north_america();
    let resolver = WorldResolver::new(&table);
    for name in AWKWARD_NAMES {
        let url = Url::parse(&resolver.resolve(&Target::named(*name))).unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs, vec![("term".to_string(), (*name).to_string())]);
    }
}

#[test]
fn test_context_menu_click_opens_profile() -> anyhow::Result<()> {
    let table = WorldTable::north_america();
    let resolver = WorldResolver::new(&table);
    let recorder = Recorder::default();
    let bus = MenuBus::new();
    let _registration = register_search_menu(&bus);

    let items = bus.open_menu(&MenuOpened {
        addon: Some("PartyMemberList".into()),
        target: Some(MenuTarget {
            name: Some("Yda Hext".into()),
            home_world: Some(409),
        }),
    });
    assert_eq!(items.len(), 1);
    let url = items[0].click(&resolver, &recorder)?;
    assert_eq!(url, "https://www.fflogs.com/character/na/kraken/Yda%20Hext");
    assert_eq!(*recorder.opened.borrow(), vec![url]);
    Ok(())
}

#[test]
fn test_slash_line_round_trip() -> anyhow::Result<()> {
    let table = WorldTable::north_america();
    let resolver = WorldResolver::new(&table);
    let recorder = Recorder::default();
    let cmd = parse_slash("/fflogs A&B").expect("slash command");
    let outcome = run_slash(&cmd, &resolver, &recorder)?;
    assert_eq!(
        outcome,
        CommandOutcome::Opened("https://www.fflogs.com/search/?term=A%26B".into())
    );
    Ok(())
}

#[test]
fn test_lib_version() {
    assert!(!ffs::FFLOGS_SEARCH_VERSION.is_empty());
}
