use pantry::cli::{
    self, FavoritesCommand, GenerateArgs, IngredientsCommand, SuggestArgs,
};
use pantry::config::{
    CatalogConfig, Config, DatabaseConfig, GeneratorConfig, ObservabilityConfig,
};
use temp_dir::TempDir;

fn test_config(dir: &TempDir) -> Config {
    Config {
        database: DatabaseConfig {
            url: format!("sqlite:{}", dir.child("pantry.db").display()),
            max_connections: 1,
        },
        catalog: CatalogConfig::default(),
        generator: GeneratorConfig { pacing_ms: 0 },
        observability: ObservabilityConfig::default(),
    }
}

#[tokio::test]
async fn test_migrate_creates_database() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = test_config(&dir);

    cli::migrate(&config).await?;
    cli::migrate(&config).await?;

    assert!(dir.child("pantry.db").exists());

    Ok(())
}

#[tokio::test]
async fn test_ingredients_persist_between_commands() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = test_config(&dir);

    cli::ingredients(
        &config,
        IngredientsCommand::Add {
            names: vec!["chicken".to_owned(), " garlic ".to_owned(), "chicken".to_owned()],
        },
    )
    .await?;
    cli::ingredients(
        &config,
        IngredientsCommand::Remove {
            name: "chicken".to_owned(),
        },
    )
    .await?;

    let session = cli::open_session(&config).await?;
    assert_eq!(session.ingredients().as_slice(), ["garlic"]);
    drop(session);

    cli::ingredients(&config, IngredientsCommand::Clear).await?;
    let session = cli::open_session(&config).await?;
    assert!(session.ingredients().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_favorites_toggle_known_recipe_only() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = test_config(&dir);

    cli::favorites(&config, FavoritesCommand::Toggle { id: "3".to_owned() }).await?;
    assert!(
        cli::favorites(&config, FavoritesCommand::Toggle { id: "999".to_owned() })
            .await
            .is_err()
    );

    let session = cli::open_session(&config).await?;
    assert_eq!(session.favorites(), ["3".to_owned()]);
    drop(session);

    cli::favorites(&config, FavoritesCommand::Toggle { id: "3".to_owned() }).await?;
    let session = cli::open_session(&config).await?;
    assert!(session.favorites().is_empty());

    Ok(())
}

fn suggest_args(diet: &str) -> SuggestArgs {
    SuggestArgs {
        ingredients: vec!["chicken".to_owned()],
        diet: diet.to_owned(),
        difficulty: "easy".to_owned(),
        time: "quick".to_owned(),
        limit: Some(3),
        json: true,
        use_saved: false,
        list_diets: false,
    }
}

#[tokio::test]
async fn test_suggest_limits_and_merges_saved() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = test_config(&dir);

    cli::ingredients(
        &config,
        IngredientsCommand::Add {
            names: vec!["rice".to_owned()],
        },
    )
    .await?;

    let mut args = suggest_args("any");
    args.use_saved = true;
    let ranked: Vec<serde_json::Value> =
        serde_json::from_str(&cli::suggestions(&config, &args).await?)?;
    let ids = ranked.iter().map(|r| r["id"].as_str()).collect::<Vec<_>>();

    assert_eq!(ids.len(), 3);
    assert_eq!(ids[..2], [Some("4"), Some("10")]);
    assert!(ranked[1]["score"].as_f64() > Some(0.0));

    let mut args = suggest_args("any");
    args.json = false;
    args.limit = Some(1);
    let out = cli::suggestions(&config, &args).await?;

    assert_eq!(out.lines().count(), 1);
    assert!(out.starts_with(" 1. "));
    assert!(out.contains("[4]"));

    Ok(())
}

#[tokio::test]
async fn test_suggest_reports_dietary_tags() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = test_config(&dir);

    let mut args = suggest_args("Vegan");
    args.json = false;
    let out = cli::suggestions(&config, &args).await?;
    let mut lines = out.lines();

    assert!(
        lines
            .next()
            .is_some_and(|line| line.starts_with("No recipe is tagged \"Vegan\". Known tags: "))
    );
    assert_eq!(lines.next(), Some("No recipes match the current filters."));

    let mut args = suggest_args("vegan");
    args.json = false;
    assert!(!cli::suggestions(&config, &args).await?.contains("Known tags"));

    args.list_diets = true;
    let tags = cli::suggestions(&config, &args).await?;
    assert_eq!(tags.lines().next(), Some("dairy-free"));
    assert!(tags.lines().any(|tag| tag == "keto-friendly"));

    Ok(())
}

#[tokio::test]
async fn test_generate_uses_saved_ingredients_first() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = test_config(&dir);

    cli::ingredients(
        &config,
        IngredientsCommand::Add {
            names: vec!["rice".to_owned()],
        },
    )
    .await?;

    let args = GenerateArgs {
        ingredients: vec!["tofu".to_owned()],
        prefer: Some(" something light ".to_owned()),
        json: false,
        use_saved: true,
    };
    let out = cli::generation(&config, &args).await?;
    let mut lines = out.lines();

    assert_eq!(lines.next(), Some("you: something light"));
    assert!(lines.next().is_some_and(|line| line.starts_with("chef: ")));
    assert!(out.contains("combines rice, tofu"));
    assert!(out.contains(" min total, serves "));

    let args = GenerateArgs {
        prefer: None,
        json: true,
        use_saved: false,
        ..args
    };
    let output: serde_json::Value = serde_json::from_str(&cli::generation(&config, &args).await?)?;

    assert_eq!(output["conversation"].as_array().map(Vec::len), Some(1));
    assert_eq!(output["conversation"][0]["role"], "assistant");
    assert!(output["recipe"]["ingredients"][0]
        .as_str()
        .is_some_and(|line| line.ends_with(" tofu")));

    Ok(())
}

#[tokio::test]
async fn test_show_unknown_recipe_fails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let config = test_config(&dir);

    assert!(cli::show(&config, "nope".to_owned()).await.is_err());
    cli::show(&config, "1".to_owned()).await?;

    Ok(())
}

#[tokio::test]
async fn test_external_catalog_is_used() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let catalog = dir.child("recipes.json");
    std::fs::write(
        &catalog,
        r#"[{
            "id": "x1",
            "name": "Toast",
            "ingredients": ["bread", "butter"],
            "instructions": ["Toast the bread."],
            "prepTime": 1,
            "cookTime": 3,
            "servings": 1,
            "difficulty": "Easy",
            "rating": 3.5
        }]"#,
    )?;

    let mut config = test_config(&dir);
    config.catalog.path = Some(catalog.display().to_string());

    let loaded = cli::load_catalog(&config)?;
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.get("x1").map(|r| r.name.as_str()), Some("Toast"));

    cli::show(&config, "x1".to_owned()).await?;

    Ok(())
}
