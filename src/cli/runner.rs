//! CLI runner - executes commands

use serde::Serialize;
use tokio::fs;
use tracing::info;

use crate::cli::commands::{Cli, Commands};
use crate::error::{Error, Result};
use crate::http::{ApiClient, Credential};
use crate::resources::{
    Community, CommunityProperties, Document, DocumentProperties, Project, ProjectProperties,
};
use crate::stream::EntityStream;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = self.client();

        match &self.cli.command {
            Commands::Communities { max_items } => {
                print_stream(client.list_communities(), *max_items).await
            }
            Commands::Community { id } => print_entity(&client.community(id).await?),
            Commands::Projects {
                community_id,
                max_items,
            } => {
                let community = community_ref(community_id);
                print_stream(client.list_projects(&community), *max_items).await
            }
            Commands::Documents { max_items } => {
                print_stream(client.list_documents(), *max_items).await
            }
            Commands::Document { id } => print_entity(&client.document(id).await?),
            Commands::Upload {
                title,
                file,
                locale_code,
                project_id,
            } => {
                let content = fs::read_to_string(file).await?;
                let project = project_ref(project_id);
                let status = client
                    .upload_string(title, &content, locale_code, &project)
                    .await?;
                print_entity(&status)
            }
            Commands::AddTranslation {
                document_id,
                locale_code,
            } => {
                let document = document_ref(document_id);
                let translation = client.add_translation(&document, locale_code).await?;
                print_entity(&translation)
            }
            Commands::Translations {
                document_id,
                max_items,
            } => {
                let document = document_ref(document_id);
                print_stream(client.list_translations(&document), *max_items).await
            }
            Commands::Status { document_id } => {
                let document = document_ref(document_id);
                print_entity(&client.check_status(&document).await?)
            }
            Commands::Download {
                document_id,
                locale_code,
                output,
            } => {
                let document = document_ref(document_id);
                let mut writer = fs::File::create(output).await?;
                let written = client
                    .translated_document(&document, locale_code, &mut writer)
                    .await?;
                println!("{written} bytes written to {}", output.display());
                Ok(())
            }
        }
    }

    /// Build the API client from the global arguments
    fn client(&self) -> ApiClient {
        let credential = match &self.cli.token {
            Some(token) => Credential::bearer(token),
            None => Credential::None,
        };

        ApiClient::new(self.cli.base_url.as_str(), credential)
    }
}

/// Drain a stream to stdout as JSON lines, optionally stopping early.
async fn print_stream<T: Serialize>(
    mut stream: EntityStream<T>,
    max_items: Option<u64>,
) -> Result<()> {
    let mut printed = 0u64;

    while let Some(item) = stream.recv().await {
        print_line(&item)?;
        printed += 1;
        if max_items.is_some_and(|max| printed >= max) {
            stream.cancel();
            break;
        }
    }

    info!("printed {printed} items");
    stream.finish().await
}

fn print_line<T: Serialize>(entity: &T) -> Result<()> {
    let line = serde_json::to_string(entity).map_err(|e| Error::decode(e.to_string()))?;
    println!("{line}");
    Ok(())
}

fn print_entity<T: Serialize>(entity: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(entity).map_err(|e| Error::decode(e.to_string()))?;
    println!("{rendered}");
    Ok(())
}

/// Community stub carrying only the id, for calls that read nothing else.
fn community_ref(id: &str) -> Community {
    Community {
        properties: CommunityProperties {
            id: id.to_string(),
            ..CommunityProperties::default()
        },
        ..Community::default()
    }
}

fn project_ref(id: &str) -> Project {
    Project {
        properties: ProjectProperties {
            id: id.to_string(),
            ..ProjectProperties::default()
        },
        ..Project::default()
    }
}

fn document_ref(id: &str) -> Document {
    Document {
        properties: DocumentProperties {
            id: id.to_string(),
            ..DocumentProperties::default()
        },
        ..Document::default()
    }
}
