use clap::Parser;
use selfsight::ai::CompletionClient;
use selfsight::db::Db;
use selfsight::email::ResendEmailSender;
use selfsight::services::assessment::AssessmentService;
use selfsight::services::newsletter::NewsletterService;
use selfsight::token::TokenSigner;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Postgres connection string.
    #[clap(env)]
    database_url: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:7373")]
    address: String,

    /// Public origin used when building links sent by email.
    #[arg(long, env, default_value = "http://localhost:7373")]
    base_url: String,

    /// Secret for signing confirmation and unsubscribe tokens.
    #[arg(long, env)]
    token_secret: Option<String>,

    /// Resend API key. Without it no email is sent and subscriptions
    /// activate immediately.
    #[arg(long, env)]
    resend_api_key: Option<String>,

    /// OpenAI API key for rewriting result copy. Without it results use
    /// the built-in copy only.
    #[arg(long, env)]
    openai_api_key: Option<String>,

    /// Model used when rewriting result copy.
    #[arg(long, env, default_value = "gpt-4o-mini")]
    openai_model: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "tracing=info,selfsight=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let token_secret = match args.token_secret {
        Some(secret) => secret,
        None => {
            tracing::warn!(
                "TOKEN_SECRET is not set, falling back to the development secret; \
                 anyone can forge confirmation and unsubscribe links"
            );
            "selfsight-dev-secret".to_owned()
        }
    };

    let db = Db::new(&args.database_url).await?;
    let email = ResendEmailSender::new(args.resend_api_key);
    let tokens = TokenSigner::new(token_secret);
    let newsletter = NewsletterService::new(db.clone(), email, tokens, args.base_url);
    let insights = CompletionClient::new(args.openai_api_key, args.openai_model);
    let assessments = AssessmentService::new(db.clone(), insights);

    let state = selfsight::AppState {
        db,
        newsletter,
        assessments,
    };

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");
    axum::serve(listener, selfsight::router(state)).await?;

    Ok(())
}
