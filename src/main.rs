use changelog_release::{create_release_application, output::output_results};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let app = create_release_application()?;
    let result = app.run()?;
    output_results(result)?;
    Ok(())
}
