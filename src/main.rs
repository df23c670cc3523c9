use anyhow::Context;
use clap::Parser;
use midori_teehaus::config::cli::{Cli, Command};
use midori_teehaus::core::ContactField;
use midori_teehaus::utils::{logger, validation::Validate};
use midori_teehaus::{
    render, ContactFormViewModel, HttpBackend, MenuViewModel, SiteConfig, SiteError, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => Some(
            TomlConfig::from_file(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
        ),
        None => None,
    };

    // 初始化日誌
    let json_logs = cli.json_logs || file_config.as_ref().is_some_and(|c| c.json_logs());
    if json_logs {
        let level = if cli.verbose {
            "debug"
        } else {
            file_config.as_ref().map_or("info", |c| c.log_level())
        };
        logger::init_json_logger(level);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if let Some(config) = &file_config {
        fail_on_invalid(config.validate());
    }

    let config = SiteConfig::from_sources(cli.base_url.clone(), file_config.as_ref());
    fail_on_invalid(config.validate());
    tracing::info!("Using backend at {}", config.base_url);
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let backend = HttpBackend::new(&config);
    let default_category = file_config
        .as_ref()
        .and_then(|c| c.default_category())
        .map(str::to_string);

    match cli.command {
        Command::Menu { category } => {
            let menu = load_menu(&backend, category.or(default_category)).await;
            println!("{}", render::menu_section(&menu));
            if menu.error_message().is_some() {
                std::process::exit(1);
            }
        }
        Command::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let mut contact = ContactFormViewModel::new();
            contact.update_field(ContactField::Name, name);
            contact.update_field(ContactField::Email, email);
            contact.update_field(ContactField::Subject, subject);
            contact.update_field(ContactField::Message, message);

            // 必填欄位由呈現層檢查，view-model 不做驗證
            fail_on_invalid(contact.form().validate());

            let outcome = contact.submit(&backend).await;
            if let Some(line) = render::contact_status(&contact) {
                println!("{}", line);
            }
            if let Err(e) = outcome {
                tracing::error!("❌ Contact submission failed: {}", e);
                std::process::exit(1);
            }
        }
        Command::Page { category } => {
            let menu = load_menu(&backend, category.or(default_category)).await;
            let contact = ContactFormViewModel::new();
            println!("{}", render::page(&menu, &contact));
        }
    }

    Ok(())
}

async fn load_menu(backend: &HttpBackend, category: Option<String>) -> MenuViewModel {
    let mut menu = MenuViewModel::new();
    // 失敗已反映在 view-model 狀態裡
    if let Err(e) = menu.load(backend).await {
        let err = SiteError::from(e);
        tracing::error!("❌ {}", err);
        tracing::error!("💡 Suggestion: {}", err.recovery_suggestion());
    }
    if let Some(category) = category {
        menu.set_active_category(category);
    }
    menu
}

fn fail_on_invalid(result: midori_teehaus::Result<()>) {
    if let Err(e) = result {
        tracing::error!("❌ Validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }
}
