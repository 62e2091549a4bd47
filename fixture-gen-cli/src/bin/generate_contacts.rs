use std::error::Error;

use fixture_gen::ShapeKind;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    fixture_gen_cli::main_for(ShapeKind::Contacts)
}
