//! Bazaar Application CLI
//!
//! Administrative operations that deliberately have no HTTP surface:
//! user accounts, API tokens, and catalog categories.

use std::process;

use clap::{Args, Parser, Subcommand};
use jiff::Timestamp;
use uuid::Uuid;

use bazaar_app::{
    auth::{
        PgAuthService,
        models::{NewUser, UserUuid},
    },
    database::{self, Db},
    domain::catalog::{
        PgCatalogService,
        models::{CategoryUuid, NewCategory},
    },
};

#[derive(Debug, Parser)]
#[command(name = "bazaar-app", about = "Bazaar admin CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// User account management
    User(UserCommand),

    /// API token management
    Token(TokenCommand),

    /// Catalog category management
    Category(CategoryCommand),
}

#[derive(Debug, Args)]
struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Debug, Subcommand)]
enum UserSubcommand {
    Create(CreateUserArgs),
}

#[derive(Debug, Args)]
struct CreateUserArgs {
    /// Unique login name
    #[arg(long)]
    username: String,

    /// Contact email address
    #[arg(long)]
    email: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[derive(Debug, Args)]
struct TokenCommand {
    #[command(subcommand)]
    command: TokenSubcommand,
}

#[derive(Debug, Subcommand)]
enum TokenSubcommand {
    Create(CreateTokenArgs),
    List(ListTokensArgs),
    Revoke(RevokeTokenArgs),
}

#[derive(Debug, Args)]
struct CreateTokenArgs {
    /// User the token authenticates
    #[arg(long)]
    user_uuid: Uuid,

    /// Optional expiry, RFC 3339 (e.g. 2027-01-01T00:00:00Z)
    #[arg(long)]
    expires_at: Option<Timestamp>,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[derive(Debug, Args)]
struct ListTokensArgs {
    /// User whose tokens to list
    #[arg(long)]
    user_uuid: Uuid,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[derive(Debug, Args)]
struct RevokeTokenArgs {
    /// Token to revoke
    #[arg(long)]
    token_uuid: Uuid,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[derive(Debug, Args)]
struct CategoryCommand {
    #[command(subcommand)]
    command: CategorySubcommand,
}

#[derive(Debug, Subcommand)]
enum CategorySubcommand {
    Create(CreateCategoryArgs),
}

#[derive(Debug, Args)]
struct CreateCategoryArgs {
    /// Category display name
    #[arg(long)]
    name: String,

    /// Category description
    #[arg(long, default_value = "")]
    description: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::User(UserCommand {
            command: UserSubcommand::Create(args),
        }) => create_user(args).await,
        Commands::Token(TokenCommand { command }) => match command {
            TokenSubcommand::Create(args) => create_token(args).await,
            TokenSubcommand::List(args) => list_tokens(args).await,
            TokenSubcommand::Revoke(args) => revoke_token(args).await,
        },
        Commands::Category(CategoryCommand {
            command: CategorySubcommand::Create(args),
        }) => create_category(args).await,
    }
}

async fn auth_service(database_url: &str) -> Result<PgAuthService, String> {
    let pool = database::connect(database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    Ok(PgAuthService::new(pool))
}

async fn create_user(args: CreateUserArgs) -> Result<(), String> {
    let service = auth_service(&args.database_url).await?;

    let user = service
        .create_user(NewUser {
            uuid: UserUuid::new(),
            username: args.username,
            email: args.email,
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("username: {}", user.username);

    Ok(())
}

async fn create_token(args: CreateTokenArgs) -> Result<(), String> {
    let service = auth_service(&args.database_url).await?;

    let issued = service
        .issue_api_token(UserUuid::from_uuid(args.user_uuid), args.expires_at)
        .await
        .map_err(|error| format!("failed to issue token: {error}"))?;

    println!("token_uuid: {}", issued.metadata.uuid);
    println!("api_token: {}", issued.token);
    println!("store this token now; it is only shown once");

    Ok(())
}

async fn list_tokens(args: ListTokensArgs) -> Result<(), String> {
    let service = auth_service(&args.database_url).await?;

    let tokens = service
        .list_api_tokens(UserUuid::from_uuid(args.user_uuid))
        .await
        .map_err(|error| format!("failed to list tokens: {error}"))?;

    for token in tokens {
        let status = if token.revoked_at.is_some() {
            "revoked"
        } else {
            "active"
        };

        println!(
            "{} created={} expires={} [{status}]",
            token.uuid,
            token.created_at,
            token
                .expires_at
                .map_or_else(|| "never".to_string(), |at| at.to_string()),
        );
    }

    Ok(())
}

async fn revoke_token(args: RevokeTokenArgs) -> Result<(), String> {
    let service = auth_service(&args.database_url).await?;

    let was_active = service
        .revoke_api_token(args.token_uuid.into())
        .await
        .map_err(|error| format!("failed to revoke token: {error}"))?;

    if was_active {
        println!("token revoked");
    } else {
        println!("token was already revoked or unknown");
    }

    Ok(())
}

async fn create_category(args: CreateCategoryArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgCatalogService::new(Db::new(pool));

    let category = service
        .create_category(NewCategory {
            uuid: CategoryUuid::new(),
            name: args.name,
            description: args.description,
        })
        .await
        .map_err(|error| format!("failed to create category: {error}"))?;

    println!("category_uuid: {}", category.uuid);
    println!("name: {}", category.name);

    Ok(())
}
