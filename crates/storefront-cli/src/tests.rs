use super::*;
use storefront_core::SortOption;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["storefront"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_facets_command() {
    let cli = Cli::try_parse_from(["storefront", "facets"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Facets)));
}

#[test]
fn parses_browse_defaults() {
    let cli = Cli::try_parse_from(["storefront", "browse"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Browse(BrowseArgs {
            sort: None,
            price_min: None,
            price_max: None,
            more: 0,
            ..
        }))
    ));
}

#[test]
fn parses_browse_with_all_options() {
    let cli = Cli::try_parse_from([
        "storefront",
        "browse",
        "--sort",
        "price-desc",
        "--color",
        "Preto",
        "--color",
        "Azul",
        "--size",
        "M",
        "--price-min",
        "10",
        "--price-max",
        "99.9",
        "--more",
        "2",
    ])
    .expect("expected valid cli args");

    let Some(Commands::Browse(args)) = cli.command else {
        panic!("expected browse command");
    };
    assert_eq!(args.sort, Some(SortOption::PriceDesc));
    assert_eq!(args.colors, vec!["Preto", "Azul"]);
    assert_eq!(args.sizes, vec!["M"]);
    assert_eq!(args.price_min, Some(10.0));
    assert_eq!(args.price_max, Some(99.9));
    assert_eq!(args.more, 2);
}

#[test]
fn rejects_unknown_sort_option() {
    let result = Cli::try_parse_from(["storefront", "browse", "--sort", "cheapest"]);
    assert!(result.is_err());
}

#[test]
fn parses_cart_adds_and_removes() {
    let cli = Cli::try_parse_from([
        "storefront",
        "cart",
        "--add",
        "1",
        "--add",
        "1",
        "--remove",
        "2",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Cart(CartArgs { ref add, ref remove }))
            if add == &["1", "1"] && remove == &["2"]
    ));
}

#[test]
fn rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["storefront", "checkout"]).is_err());
}
