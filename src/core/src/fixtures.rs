use crate::Confederation::*;
use crate::{Catalog, Confederation, Team};

const TEAMS: [(&str, Confederation, u8); 48] = [
    ("can", Concacaf, 1),
    ("mex", Concacaf, 1),
    ("usa", Concacaf, 1),
    ("esp", Uefa, 1),
    ("arg", Conmebol, 1),
    ("fra", Uefa, 1),
    ("eng", Uefa, 1),
    ("bra", Conmebol, 1),
    ("por", Uefa, 1),
    ("ned", Uefa, 1),
    ("bel", Uefa, 1),
    ("ger", Uefa, 1),
    ("cro", Uefa, 2),
    ("mar", Caf, 2),
    ("col", Conmebol, 2),
    ("uru", Conmebol, 2),
    ("sui", Uefa, 2),
    ("jpn", Afc, 2),
    ("sen", Caf, 2),
    ("irn", Afc, 2),
    ("kor", Afc, 2),
    ("ecu", Conmebol, 2),
    ("aut", Uefa, 2),
    ("aus", Afc, 2),
    ("nor", Uefa, 3),
    ("pan", Concacaf, 3),
    ("egy", Caf, 3),
    ("alg", Caf, 3),
    ("sco", Uefa, 3),
    ("par", Conmebol, 3),
    ("tun", Caf, 3),
    ("civ", Caf, 3),
    ("uzb", Afc, 3),
    ("qat", Afc, 3),
    ("ksa", Afc, 3),
    ("rsa", Caf, 3),
    ("jor", Afc, 4),
    ("cpv", Caf, 4),
    ("gha", Caf, 4),
    ("cur", Concacaf, 4),
    ("hai", Concacaf, 4),
    ("nzl", Ofc, 4),
    ("po_uefa_a", Uefa, 4),
    ("po_uefa_b", Uefa, 4),
    ("po_uefa_c", Uefa, 4),
    ("po_uefa_d", Uefa, 4),
    ("po_fifa_1", Ofc, 4),
    ("po_fifa_2", Afc, 4),
];

fn avoid_set(id: &str) -> Option<[Confederation; 3]> {
    match id {
        "po_fifa_1" => Some([Ofc, Concacaf, Caf]),
        "po_fifa_2" => Some([Afc, Conmebol, Concacaf]),
        _ => None,
    }
}

pub fn world_cup_teams() -> Vec<Team> {
    TEAMS
        .iter()
        .map(|(id, confederation, pot)| {
            let builder = Team::builder().id(*id).confederation(*confederation).pot(*pot);
            let builder = match avoid_set(id) {
                Some(avoid) => builder.avoid_confederations(avoid),
                None => builder,
            };

            builder.build().unwrap()
        })
        .collect()
}

pub fn world_cup_catalog() -> Catalog {
    Catalog::new(world_cup_teams()).unwrap()
}
