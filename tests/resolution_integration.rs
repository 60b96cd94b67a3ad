//! End-to-end resolution against the bundled roster

use campaign_console::command::{
    format_candidates, resolve_multiple_matches, select_single, ParsedArguments, ResolutionError,
};
use campaign_console::world::{Hero, Roster};

fn roster() -> Roster {
    Roster::bundled().expect("bundled roster should load")
}

fn pick<'a>(hits: &[&'a Hero], query: &str) -> Result<&'a Hero, ResolutionError> {
    select_single(hits, query, |competing| format_candidates(competing, 10)).map(|h| *h)
}

#[test]
fn test_exact_name_beats_longer_names() {
    let roster = roster();
    let hits = roster.search_heroes("caladog");
    assert_eq!(hits.len(), 2);

    let hero = pick(&hits, "caladog").unwrap();
    assert_eq!(hero.id, "lord_4_1");
}

#[test]
fn test_bob_resolves_by_exact_name() {
    // "Bob" equals the query, so the exact-name tier answers before the
    // prefix tier ever sees "Bobby" or "Jimbob".
    let roster = roster();
    let hits = roster.search_heroes("bob");
    assert_eq!(hits.len(), 3);
    assert_eq!(pick(&hits, "bob").unwrap().id, "wanderer_bob");
}

#[test]
fn test_shortest_id_breaks_id_ties() {
    let roster = roster();
    let hits = roster.search_heroes("bobb");
    assert_eq!(hits.len(), 1);
    assert_eq!(pick(&hits, "bobb").unwrap().name, "Bobby");

    // Matches wanderer_bob, wanderer_bobby and Jimbob; no name starts with it.
    let hits = roster.search_heroes("ob");
    assert_eq!(hits.len(), 3);
    assert_eq!(pick(&hits, "ob").unwrap().id, "wanderer_bob");
}

#[test]
fn test_prefix_with_broader_substring_is_refused() {
    let roster = roster();
    let hits = roster.search_settlements("mill");
    let err = select_single(&hits, "mill", |c| format_candidates(c, 10)).unwrap_err();

    assert!(matches!(err, ResolutionError::AmbiguousBroaderSubstring { .. }), "{err:?}");
    let listing = err.listing().unwrap();
    assert!(listing.contains("Old Mill"));
    assert!(listing.contains("Mill Creek"));
}

#[test]
fn test_duplicate_names_need_an_id() {
    let roster = roster();
    let hits = roster.search_heroes("Rhagaea");
    let err = pick(&hits, "Rhagaea").unwrap_err();

    assert!(matches!(err, ResolutionError::AmbiguousExactName { .. }));
    let listing = err.listing().unwrap();
    assert!(listing.contains("Rhagaea (id: lord_3_1)"));
    assert!(listing.contains("Rhagaea (id: lord_3_9)"));

    let hits = roster.search_heroes("lord_3_9");
    assert_eq!(pick(&hits, "lord_3_9").unwrap().clan.as_deref(), Some("clan_empire_south_2"));
}

#[test]
fn test_id_prefix_across_settlements() {
    let roster = roster();
    let hits = roster.search_settlements("castle");
    assert_eq!(hits.len(), 1);

    let hits = roster.search_settlements("town_");
    let err = select_single(&hits, "town_", |c| format_candidates(c, 2)).unwrap_err();
    assert!(matches!(err, ResolutionError::AmbiguousIdPrefix { .. }));
    assert!(err.to_string().contains("... and 2 more"));
}

#[test]
fn test_name_only_matches_are_ambiguous() {
    let roster = roster();
    // Both Rhagaeas and Raganvad contain it, none start with it, no id has it.
    let hits = roster.search_heroes("aga");
    assert_eq!(hits.len(), 3);
    let err = pick(&hits, "aga").unwrap_err();
    assert!(matches!(err, ResolutionError::AmbiguousNameOnly { .. }));
}

#[test]
fn test_exact_name_ignores_id_only_match() {
    let heroes = [
        Hero {
            id: "lord_unqid".into(),
            name: "Somebody".into(),
            clan: None,
            age: None,
            alive: true,
        },
        Hero {
            id: "lord_1_7".into(),
            name: "Unqid".into(),
            clan: None,
            age: None,
            alive: true,
        },
    ];
    let winner = resolve_multiple_matches(
        &heroes,
        "UNQID",
        |h: &Hero| h.id.as_str(),
        |h: &Hero| h.name.as_str(),
        |_| unreachable!("no ambiguity expected"),
    )
    .unwrap();
    assert_eq!(winner.id, "lord_1_7");
}

#[test]
fn test_named_and_positional_forms_agree() {
    let roster = roster();
    for raw in [
        vec!["caladog"],
        vec!["hero:caladog"],
        vec!["hero:'Caladog'"],
    ] {
        let args = ParsedArguments::parse(&raw[..]);
        let query = args.get_argument("hero", 0).unwrap();
        let hits = roster.search_heroes(query);
        assert_eq!(pick(&hits, query).unwrap().id, "lord_4_1", "{raw:?}");
    }
}

#[test]
fn test_no_hits_is_no_match() {
    let roster = roster();
    let hits = roster.search_clans("khuzait");
    let err = select_single(&hits, "khuzait", |c| format_candidates(c, 10)).unwrap_err();
    assert_eq!(err.to_string(), "No match found for 'khuzait'");
}
