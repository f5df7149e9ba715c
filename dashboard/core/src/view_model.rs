use std::cmp::Ordering;
use std::collections::HashMap;

use anyhow::{bail, Result};

use dashboard_core_api::{DashboardViewModel, Direction, DisplayCard, ListItem, MoverEntry};
use domain_model::{AssetQuote, AssetRegistry};

use crate::format;

const MOVERS_LIMIT: usize = 6;

/// Builds every view model from one batch of quotes. Cards and list items
/// follow registry order; movers rank by absolute 24h change, stable on
/// ties, capped at the top six.
pub fn build(
    quotes: &HashMap<String, AssetQuote>,
    registry: &AssetRegistry,
) -> Result<DashboardViewModel> {
    for asset_id in quotes.keys() {
        if !registry.contains(asset_id) {
            bail!("Asset id '{asset_id}' is missing from the display registry");
        }
    }

    let mut cards = Vec::new();
    let mut list_items = Vec::new();
    let mut ranked = Vec::new();
    for info in registry.iter() {
        if let Some(quote) = quotes.get(info.id) {
            let direction = Direction::from_change(quote.change_24h_pct);
            let price = format::price_usd(quote.price_usd);
            let change = format!("{} {}", direction.glyph(), format::change_pct(quote.change_24h_pct));

            cards.push(DisplayCard {
                asset_id: quote.asset_id.clone(),
                display_name: info.display_name.to_string(),
                glyph: info.glyph.to_string(),
                price: price.clone(),
                change: change.clone(),
                direction,
            });
            list_items.push(ListItem {
                glyph: info.glyph.to_string(),
                display_name: info.display_name.to_string(),
                price,
                change: change.clone(),
                direction,
            });
            ranked.push((
                quote.change_24h_pct.abs(),
                MoverEntry {
                    glyph: info.glyph.to_string(),
                    display_name: info.display_name.to_string(),
                    change,
                    direction,
                },
            ));
        }
    }

    // stable sort keeps registry order between equal movers
    ranked.sort_by(|(left, _), (right, _)| right.partial_cmp(left).unwrap_or(Ordering::Equal));
    let movers = ranked
        .into_iter()
        .take(MOVERS_LIMIT)
        .map(|(_, entry)| entry)
        .collect();

    Ok(DashboardViewModel {
        cards,
        list_items,
        movers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quotes(entries: &[(&str, f64, f64)]) -> HashMap<String, AssetQuote> {
        entries
            .iter()
            .map(|&(asset_id, price, change)| {
                (asset_id.to_string(), AssetQuote::new(asset_id, price, change))
            })
            .collect()
    }

    #[test]
    fn test_cards_and_list_follow_registry_order() {
        let registry = AssetRegistry::tracked();
        let quotes = quotes(&[
            ("ethereum", 3000.0, -5.0),
            ("bitcoin", 50000.0, 2.5),
            ("eos", 0.5, 1.0),
        ]);

        let view = build(&quotes, &registry).unwrap();

        assert_eq!(view.cards.len(), 3);
        assert_eq!(view.list_items.len(), 3);
        assert_eq!(view.cards[0].asset_id, "bitcoin");
        assert_eq!(view.cards[1].asset_id, "ethereum");
        assert_eq!(view.cards[2].asset_id, "eos");
        assert_eq!(view.list_items[0].display_name, "Bitcoin");
        assert_eq!(view.list_items[2].display_name, "EOS");
    }

    #[test]
    fn test_card_formatting() {
        let registry = AssetRegistry::tracked();
        let quotes = quotes(&[("bitcoin", 50000.0, 2.5), ("ethereum", 3000.0, -5.0)]);

        let view = build(&quotes, &registry).unwrap();

        let bitcoin = &view.cards[0];
        assert_eq!(bitcoin.price, "$50,000.00");
        assert_eq!(bitcoin.change, "▲ 2.50%");
        assert_eq!(bitcoin.direction, Direction::Up);

        let ethereum = &view.cards[1];
        assert_eq!(ethereum.change, "▼ -5.00%");
        assert_eq!(ethereum.direction, Direction::Down);
    }

    #[test]
    fn test_zero_change_points_up() {
        let registry = AssetRegistry::tracked();
        let quotes = quotes(&[("bitcoin", 50000.0, 0.0)]);

        let view = build(&quotes, &registry).unwrap();

        assert_eq!(view.cards[0].direction, Direction::Up);
        assert_eq!(view.cards[0].change, "▲ 0.00%");
    }

    #[test]
    fn test_movers_ranked_by_absolute_change() {
        let registry = AssetRegistry::tracked();
        let quotes = quotes(&[("bitcoin", 50000.0, 2.5), ("ethereum", 3000.0, -5.0)]);

        let view = build(&quotes, &registry).unwrap();

        assert_eq!(view.movers.len(), 2);
        assert_eq!(view.movers[0].display_name, "Ethereum");
        assert_eq!(view.movers[1].display_name, "Bitcoin");
    }

    #[test]
    fn test_movers_truncate_to_top_six_and_break_ties_by_registry_order() {
        let registry = AssetRegistry::tracked();
        let quotes = quotes(&[
            ("bitcoin", 1.0, 1.0),
            ("ethereum", 1.0, -1.0),
            ("binancecoin", 1.0, 1.0),
            ("cardano", 1.0, 9.0),
            ("solana", 1.0, 1.0),
            ("ripple", 1.0, 1.0),
            ("dogecoin", 1.0, 1.0),
            ("polkadot", 1.0, 1.0),
        ]);

        let view = build(&quotes, &registry).unwrap();

        assert_eq!(view.movers.len(), 6);
        assert_eq!(view.movers[0].display_name, "Cardano");
        // remaining entries all tie at |1.0| and keep registry order
        assert_eq!(view.movers[1].display_name, "Bitcoin");
        assert_eq!(view.movers[2].display_name, "Ethereum");
        assert_eq!(view.movers[3].display_name, "Binance Coin");
        assert_eq!(view.movers[4].display_name, "Solana");
        assert_eq!(view.movers[5].display_name, "Ripple");
    }

    #[test]
    fn test_empty_quotes_build_empty_view() {
        let registry = AssetRegistry::tracked();
        let view = build(&HashMap::new(), &registry).unwrap();

        assert!(view.cards.is_empty());
        assert!(view.list_items.is_empty());
        assert!(view.movers.is_empty());
    }

    #[test]
    fn test_unknown_asset_fails_the_build() {
        let registry = AssetRegistry::tracked();
        let quotes = quotes(&[("shiba-inu", 0.00001, 3.0)]);

        let err = build(&quotes, &registry).unwrap_err();
        assert!(err.to_string().contains("shiba-inu"));
    }
}
