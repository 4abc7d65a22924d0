#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    let _ = dotenvy::dotenv();

    let config = match parkease::Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        }
    };

    let _rocket = parkease::build_rocket(config).launch().await?;

    Ok(())
}
