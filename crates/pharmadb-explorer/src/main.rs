//! PharmaDB explorer: fetch a drug's labels and patents, print its
//! timeline, and optionally diff two label revisions.

use anyhow::{bail, Context, Result};
use drug_label_viewer::ViewAction;
use pharmadb_client::{HttpDrugClient, DEFAULT_API_URL};

mod output;
mod session;

use session::Session;

const USAGE: &str = "usage: pharmadb-explorer <application-number> [label-one label-two]";

/// Parse the optional trailing label-index pair.
///
/// Either no indices or exactly two are accepted; a single dangling
/// index is rejected instead of being silently ignored.
fn parse_label_pair(args: &[String]) -> Result<Option<(usize, usize)>> {
    match args {
        [] => Ok(None),
        [one, two] => Ok(Some((
            one.parse().context("label-one must be an index")?,
            two.parse().context("label-two must be an index")?,
        ))),
        _ => bail!(USAGE),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(application_number) = args.first() else {
        bail!(USAGE);
    };
    let label_pair = parse_label_pair(&args[1..])?;

    let base_url =
        std::env::var("PHARMADB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let client = HttpDrugClient::new(&base_url)?;

    log::info!("Loading {} from {}", application_number, base_url);

    let mut session = Session::new();
    session.load(&client, application_number).await;
    if let Some(err) = session.error() {
        bail!("failed to load {}: {}", application_number, err);
    }

    print!("{}", output::render_timeline(session.markers()));

    if let Some((one, two)) = label_pair {
        let view = session.view_mut().context("no drug loaded")?;
        view.handle_action(ViewAction::SelectLabel(one));
        view.handle_action(ViewAction::SelectLabel(two));

        match &view.config().label_diff {
            Some(diff) => print!("{}", output::render_label_diff(diff)),
            None => bail!("labels {} and {} could not be selected", one, two),
        }
    }

    Ok(())
}
