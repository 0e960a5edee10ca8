// Loading and saving display preferences through an isolated context.
use timegrid::config::Config;
use timegrid::context::{AppContext, TestContext};
use timegrid::render::RenderOptions;

#[test]
fn test_missing_config_is_detected() {
    let ctx = TestContext::new();
    let err = Config::load(&ctx).unwrap_err();
    assert!(Config::is_missing_config_error(&err));

    let cfg = Config::load_or_default(&ctx).unwrap();
    assert_eq!(cfg, Config::default());
}

#[test]
fn test_save_then_load() {
    let ctx = TestContext::new();
    let cfg = Config {
        show_weekend: false,
        cell_width: 20,
        ..Config::default()
    };
    cfg.save(&ctx).unwrap();

    let loaded = Config::load(&ctx).unwrap();
    assert_eq!(loaded, cfg);

    let opts = RenderOptions::from_config(&loaded);
    assert!(!opts.show_weekend);
    assert!(opts.show_evening);
    assert_eq!(opts.cell_width, 20);
}

#[test]
fn test_partial_file_uses_defaults() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    std::fs::write(&path, "show_evening = false\n").unwrap();

    let cfg = Config::load(&ctx).unwrap();
    assert!(!cfg.show_evening);
    assert!(cfg.show_weekend);
    assert_eq!(cfg.cell_width, 14);
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn test_broken_file_is_an_error_not_missing() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    std::fs::write(&path, "show_weekend = maybe\n").unwrap();

    let err = Config::load(&ctx).unwrap_err();
    assert!(!Config::is_missing_config_error(&err));
    assert!(Config::load_or_default(&ctx).is_err());
}

#[test]
fn test_context_cleans_up_on_drop() {
    let root = {
        let ctx = TestContext::new();
        Config::default().save(&ctx).unwrap();
        ctx.root.clone()
    };
    assert!(!root.exists());
}

#[test]
fn test_config_path_is_known_even_when_file_is_broken() {
    let ctx = TestContext::new();
    let path = ctx.get_config_file_path().unwrap();
    std::fs::write(&path, "cell_width = \"wide\"\n").unwrap();

    assert!(Config::load(&ctx).is_err());
    let shown = Config::get_path_string(&ctx).unwrap();
    assert_eq!(shown, path.to_string_lossy());
}
