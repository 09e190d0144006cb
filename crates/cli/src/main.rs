use anyhow::Context;
use api_grpc::convert;
use api_shared::auth::API_KEY_HEADER;
use api_shared::pb::sample_service_client::SampleServiceClient;
use clap::{Parser, Subcommand};
use sample_core::{
    CreateSampleRequest, DeleteSampleRequest, ListSamplesRequest, Sample, SampleId, SampleName,
    UpdateSampleRequest,
};
use tonic::metadata::AsciiMetadataValue;
use tonic::transport::Channel;
use tonic::Request;

#[derive(Parser)]
#[command(name = "sample")]
#[command(about = "Sample service gRPC client")]
struct Cli {
    /// Server endpoint
    #[arg(long, default_value = "http://127.0.0.1:50051")]
    addr: String,
    /// API key sent as x-api-key (optional)
    #[arg(long)]
    api_key: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all samples
    List,
    /// Create a sample
    Create {
        /// Sample name
        name: String,
    },
    /// Rename a sample
    Update {
        /// Sample ID
        id: String,
        /// New sample name
        name: String,
    },
    /// Delete a sample
    Delete {
        /// Sample ID
        id: String,
    },
}

/// Wraps `message` in a request carrying the API key, if one was given.
fn request<T>(message: T, api_key: Option<&str>) -> anyhow::Result<Request<T>> {
    let mut req = Request::new(message);
    if let Some(key) = api_key {
        let value: AsciiMetadataValue = key.parse().context("API key is not valid metadata")?;
        req.metadata_mut().insert(API_KEY_HEADER, value);
    }
    Ok(req)
}

fn print_sample(sample: &Sample) {
    println!("ID: {}, Name: {}", sample.id(), sample.name());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let api_key = cli.api_key.as_deref();

    let mut client: SampleServiceClient<Channel> = SampleServiceClient::connect(cli.addr.clone())
        .await
        .with_context(|| format!("failed to connect to {}", cli.addr))?;

    match cli.command {
        Commands::List => {
            let req = ListSamplesRequest::new();
            let res = client
                .list_samples(request(convert::list_samples_request_to_pb(&req), api_key)?)
                .await?
                .into_inner();
            let res = convert::list_samples_response_from_pb(res)?;
            if res.samples().is_empty() {
                println!("No samples found.");
            } else {
                res.samples().iter().for_each(print_sample);
            }
        }
        Commands::Create { name } => {
            let req = CreateSampleRequest::new(SampleName::new(name)?);
            let res = client
                .create_sample(request(convert::create_sample_request_to_pb(&req), api_key)?)
                .await?
                .into_inner();
            let res = convert::create_sample_response_from_pb(res)?;
            println!("Created sample with ID: {}", res.sample().id());
        }
        Commands::Update { id, name } => {
            let req = UpdateSampleRequest::new(SampleId::new(id)?, SampleName::new(name)?);
            let res = client
                .update_sample(request(convert::update_sample_request_to_pb(&req), api_key)?)
                .await?
                .into_inner();
            let res = convert::update_sample_response_from_pb(&req, res)?;
            print_sample(res.sample());
        }
        Commands::Delete { id } => {
            let req = DeleteSampleRequest::new(SampleId::new(id)?);
            let res = client
                .delete_sample(request(convert::delete_sample_request_to_pb(&req), api_key)?)
                .await?
                .into_inner();
            let res = convert::delete_sample_response_from_pb(&req, res)?;
            println!("Deleted sample with ID: {}", res.sample().id());
        }
    }

    Ok(())
}
