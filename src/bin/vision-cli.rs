use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use vision_helpers::config::{load_config, validation::validate_config, ConfigError, VisionConfig};
use vision_helpers::model::{AnnotateImageRequest, Feature, FeatureType, ImageContext};
use vision_helpers::observability::logging;
use vision_helpers::request::ImageInput;
use vision_helpers::versions::{Version, V1, V1p1beta1, V1p2beta1, V1p3beta1, V1p4beta1};
use vision_helpers::{ApiVersion, HttpAnnotator, VisionClient};

#[derive(Parser)]
#[command(name = "vision-cli")]
#[command(about = "Run image annotation requests against the Vision API", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API version (overrides the config file).
    #[arg(long)]
    api_version: Option<ApiVersion>,

    /// Service endpoint (overrides the config file).
    #[arg(long)]
    endpoint: Option<String>,

    /// Log level (overrides the config file).
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ImageArgs {
    /// Local path, file:// URL, https:// URL or gs:// URI.
    image: String,

    /// Maximum number of results.
    #[arg(long)]
    max_results: Option<i32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect faces
    Faces(ImageArgs),
    /// Detect labels
    Labels(ImageArgs),
    /// Detect landmarks
    Landmarks(ImageArgs),
    /// Detect logos
    Logos(ImageArgs),
    /// Detect text
    Text(ImageArgs),
    /// Detect dense document text
    DocumentText(ImageArgs),
    /// Detect explicit content
    SafeSearch(ImageArgs),
    /// Detect image properties (dominant colors)
    Properties(ImageArgs),
    /// Suggest crop regions
    CropHints(ImageArgs),
    /// Search the web for matching images
    Web(ImageArgs),
    /// Localize objects
    Objects(ImageArgs),
    /// Search a product set for similar products
    ProductSearch {
        #[command(flatten)]
        image: ImageArgs,

        /// Product set resource name.
        #[arg(long)]
        product_set: String,

        /// Product category (repeatable).
        #[arg(long = "category", required = true)]
        categories: Vec<String>,

        /// Label filter, e.g. "style=womens".
        #[arg(long)]
        filter: Option<String>,
    },
    /// Run several features on one or more images
    Annotate {
        /// Images to annotate (sent as one batch).
        #[arg(required = true)]
        images: Vec<String>,

        /// Feature type, e.g. label-detection (repeatable).
        #[arg(short, long = "feature", required = true)]
        features: Vec<FeatureType>,

        /// Maximum number of results per feature.
        #[arg(long)]
        max_results: Option<i32>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => VisionConfig::default(),
    };
    if let Some(version) = cli.api_version {
        config.client.api_version = version;
    }
    if let Some(endpoint) = cli.endpoint {
        config.client.endpoint = endpoint;
    }
    if let Some(level) = cli.log_level {
        config.observability.log_level = level;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init(&config.observability.log_level)?;

    tracing::info!(
        endpoint = %config.client.endpoint,
        api_version = %config.client.api_version,
        "vision-cli starting"
    );

    let output = match config.client.api_version {
        ApiVersion::V1 => run::<V1>(&config, cli.command).await?,
        ApiVersion::V1p1beta1 => run::<V1p1beta1>(&config, cli.command).await?,
        ApiVersion::V1p2beta1 => run::<V1p2beta1>(&config, cli.command).await?,
        ApiVersion::V1p3beta1 => run::<V1p3beta1>(&config, cli.command).await?,
        ApiVersion::V1p4beta1 => run::<V1p4beta1>(&config, cli.command).await?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn run<V: Version>(
    config: &VisionConfig,
    command: Commands,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let client = VisionClient::<V, HttpAnnotator>::from_config(config)?;

    let output = match command {
        Commands::Faces(args) => single(&client, &args, FeatureType::FaceDetection).await?,
        Commands::Labels(args) => single(&client, &args, FeatureType::LabelDetection).await?,
        Commands::Landmarks(args) => single(&client, &args, FeatureType::LandmarkDetection).await?,
        Commands::Logos(args) => single(&client, &args, FeatureType::LogoDetection).await?,
        Commands::Text(args) => single(&client, &args, FeatureType::TextDetection).await?,
        Commands::DocumentText(args) => {
            single(&client, &args, FeatureType::DocumentTextDetection).await?
        }
        Commands::SafeSearch(args) => {
            single(&client, &args, FeatureType::SafeSearchDetection).await?
        }
        Commands::Properties(args) => single(&client, &args, FeatureType::ImageProperties).await?,
        Commands::CropHints(args) => single(&client, &args, FeatureType::CropHints).await?,
        Commands::Web(args) => single(&client, &args, FeatureType::WebDetection).await?,
        Commands::Objects(args) => single(&client, &args, FeatureType::ObjectLocalization).await?,
        Commands::Annotate {
            images,
            features,
            max_results,
        } => {
            let requests = batch_requests(&images, &features, max_results);
            match <[AnnotateImageRequest; 1]>::try_from(requests) {
                Ok([request]) => serde_json::to_value(client.annotate_image(request).await?)?,
                Err(requests) => serde_json::to_value(client.annotate_images(requests).await?)?,
            }
        }
        Commands::ProductSearch {
            image,
            product_set,
            categories,
            filter,
        } => {
            let mut params = serde_json::json!({
                "productSet": product_set,
                "productCategories": categories,
            });
            if let Some(filter) = filter {
                params["filter"] = serde_json::Value::String(filter);
            }
            let request = pinned_request(&image, FeatureType::ProductSearch).with_image_context(
                ImageContext {
                    product_search_params: Some(params),
                    ..Default::default()
                },
            );
            serde_json::to_value(client.annotate_feature(request, FeatureType::ProductSearch).await?)?
        }
    };

    Ok(output)
}

async fn single<V: Version>(
    client: &VisionClient<V, HttpAnnotator>,
    args: &ImageArgs,
    feature: FeatureType,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let request = pinned_request(args, feature);
    Ok(serde_json::to_value(client.annotate_feature(request, feature).await?)?)
}

fn batch_requests(
    images: &[String],
    features: &[FeatureType],
    max_results: Option<i32>,
) -> Vec<AnnotateImageRequest> {
    images
        .iter()
        .map(|image| {
            let mut request = ImageInput::from(image.as_str()).into_request();
            request.features = features
                .iter()
                .map(|f| feature_with_limit(*f, max_results))
                .collect();
            request
        })
        .collect()
}

fn pinned_request(args: &ImageArgs, feature: FeatureType) -> AnnotateImageRequest {
    ImageInput::from(args.image.as_str())
        .into_request()
        .with_feature(feature_with_limit(feature, args.max_results))
}

fn feature_with_limit(feature: FeatureType, max_results: Option<i32>) -> Feature {
    match max_results {
        Some(n) => Feature::new(feature).with_max_results(n),
        None => Feature::new(feature),
    }
}
