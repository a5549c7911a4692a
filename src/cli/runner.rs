use clap::Parser;
use serde_json::json;

use crate::catalog::{
    Catalog, Selection, Source, available_channels, available_sizes, capture_time, folders,
    in_folder, overlays_for,
};
use crate::config::{ViewerConfig, load_config};
use crate::remote::Endpoints;
use crate::runtime::AppContext;

use super::types::{
    ChoiceInfo, ChoicesOutput, Cli, Commands, ImageEntry, ListOutput, SelectionInfo,
};

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path).map_err(|error| error.to_string())?,
        None => ViewerConfig::default(),
    }
    .with_server(cli.server);
    let app = AppContext::new(config).map_err(|error| error.to_string())?;

    match cli.command.unwrap_or(Commands::View) {
        Commands::View => {
            crate::ui::run(app)?;
        }
        Commands::List {
            selection,
            folder,
            limit,
            urls,
        } => {
            let mut catalog = connected_catalog(&app)?;
            let endpoints = if urls {
                Some(app.config().endpoints().map_err(|error| error.to_string())?)
            } else {
                None
            };
            let output = list_output(
                &mut catalog,
                &selection.selection(),
                folder.as_deref(),
                limit,
                endpoints.as_ref(),
            );
            println!(
                "{}",
                serde_json::to_string_pretty(&output).map_err(|error| error.to_string())?
            );
        }
        Commands::Choices { source } => {
            let mut catalog = connected_catalog(&app)?;
            let output = choices_output(&mut catalog, source);
            println!(
                "{}",
                serde_json::to_string_pretty(&output).map_err(|error| error.to_string())?
            );
        }
        Commands::Folders => {
            let catalog = connected_catalog(&app)?;
            println!(
                "{}",
                serde_json::to_string_pretty(&folders(catalog.paths()))
                    .map_err(|error| error.to_string())?
            );
        }
        Commands::Download { path, output } => {
            let written = app
                .download_service()
                .map_err(|error| error.to_string())?
                .download(&path, output.as_deref())
                .map_err(|error| error.to_string())?;
            println!("{}", json!({"status": "ok", "output": written}));
        }
    }

    Ok(())
}

fn connected_catalog(app: &AppContext) -> Result<Catalog, String> {
    app.source().map_err(|error| error.to_string())?;
    Ok(Catalog::new(app.catalog_service().fetch_listing()))
}

pub(super) fn list_output(
    catalog: &mut Catalog,
    selection: &Selection,
    folder: Option<&str>,
    limit: Option<usize>,
    endpoints: Option<&Endpoints>,
) -> ListOutput {
    let selected = catalog.select(selection);
    let matches = match folder {
        Some(folder) => in_folder(&selected, folder),
        None => selected.to_vec(),
    };
    let shown = limit.unwrap_or(matches.len()).min(matches.len());
    let images = matches[..shown]
        .iter()
        .map(|path| ImageEntry {
            path: path.clone(),
            captured: capture_time(path).map(|time| time.format("%Y-%m-%d %H:%M:%S").to_string()),
            url: endpoints.map(|endpoints| endpoints.display(path, selection.source)),
        })
        .collect();
    ListOutput {
        selection: SelectionInfo::from(selection),
        found: matches.len(),
        images,
    }
}

pub(super) fn choices_output(catalog: &mut Catalog, source: Source) -> ChoicesOutput {
    let paths = catalog.for_source(source);
    ChoicesOutput {
        source: source.label(),
        sizes: available_sizes(&paths)
            .into_iter()
            .map(|size| ChoiceInfo {
                token: size.token(),
                label: size.label(),
            })
            .collect(),
        channels: available_channels(&paths)
            .into_iter()
            .map(|channel| ChoiceInfo {
                token: channel.token,
                label: channel.label,
            })
            .collect(),
        overlays: overlays_for(source)
            .iter()
            .map(|overlay| ChoiceInfo {
                token: overlay.token(),
                label: overlay.label(),
            })
            .collect(),
    }
}
