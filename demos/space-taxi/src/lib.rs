use wasm_bindgen::prelude::*;
use spacecab_engine::*;

mod game;

use game::SpaceTaxi;

spacecab_web::export_game!(SpaceTaxi, "space-taxi");
