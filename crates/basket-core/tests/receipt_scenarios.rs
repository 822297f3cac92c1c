//! End-to-end basket scenarios: raw lines in, receipt text out.

use basket_core::{
    parse_batch, parse_line, parse_text, process_basket, process_sample, process_text,
    CoreError, Money, ParseError, Receipt, SampleBasket, TaxEngine,
};
use rstest::rstest;

const OUTPUT_ONE: &str = "1 book: 12.49
1 music CD: 16.49
1 chocolate bar: 0.85
Sales Taxes: 1.50
Total: 29.83";

const OUTPUT_TWO: &str = "1 imported box of chocolates: 10.50
1 imported bottle of perfume: 54.65
Sales Taxes: 7.65
Total: 65.15";

const OUTPUT_THREE: &str = "1 imported bottle of perfume: 32.19
1 bottle of perfume: 20.89
1 packet of headache pills: 9.75
1 imported box of chocolates: 11.85
Sales Taxes: 6.70
Total: 74.68";

#[rstest]
#[case(SampleBasket::One, OUTPUT_ONE)]
#[case(SampleBasket::Two, OUTPUT_TWO)]
#[case(SampleBasket::Three, OUTPUT_THREE)]
fn sample_baskets_produce_expected_receipts(#[case] basket: SampleBasket, #[case] expected: &str) {
    assert_eq!(process_basket(basket.lines()).unwrap(), expected);
    assert_eq!(process_sample(basket).unwrap(), expected);
}

#[rstest]
#[case(SampleBasket::One, 150, 2983)]
#[case(SampleBasket::Two, 765, 6515)]
#[case(SampleBasket::Three, 670, 7468)]
fn sample_basket_totals(#[case] basket: SampleBasket, #[case] tax: i64, #[case] total: i64) {
    let receipt = Receipt::from_items(TaxEngine::new(), parse_batch(basket.lines()).unwrap());
    assert_eq!(receipt.total_tax().unwrap(), Money::from_cents(tax));
    assert_eq!(receipt.total_cost().unwrap(), Money::from_cents(total));
}

#[test]
fn text_block_with_comments_and_blank_lines() {
    let text = "# Shopping Basket 1
1 book at 12.49

1 music CD at 14.99
# This is a chocolate
1 chocolate bar at 0.85";

    let items = parse_text(text).unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].name(), "book");
    assert_eq!(items[2].name(), "chocolate bar");

    assert_eq!(process_text(text).unwrap(), OUTPUT_ONE);
}

#[test]
fn empty_basket_still_prints_summary() {
    assert_eq!(
        process_basket(Vec::<String>::new()).unwrap(),
        "Sales Taxes: 0.00\nTotal: 0.00"
    );
    assert_eq!(
        process_text("# nothing to buy\n").unwrap(),
        "Sales Taxes: 0.00\nTotal: 0.00"
    );
}

#[test]
fn quantity_greater_than_one() {
    let receipt = Receipt::from_items(TaxEngine::new(), parse_batch(["2 books at 10.00"]).unwrap());
    assert_eq!(receipt.total_cost().unwrap(), Money::from_cents(2000));
    assert_eq!(
        receipt.format().unwrap(),
        "2 books: 10.00\nSales Taxes: 0.00\nTotal: 20.00"
    );
}

#[test]
fn individual_item_taxes() {
    let engine = TaxEngine::new();
    let tax = |line: &str| engine.tax_for_item(&parse_line(line).unwrap()).unwrap();

    assert_eq!(tax("1 music CD at 14.99"), Money::from_cents(150));
    assert_eq!(tax("1 imported bottle of perfume at 47.50"), Money::from_cents(715));
    assert_eq!(tax("1 imported box of chocolates at 10.00"), Money::from_cents(50));
    assert_eq!(tax("1 book at 12.49"), Money::zero());
}

#[test]
fn malformed_and_empty_lines() {
    assert!(matches!(
        parse_line("invalid input"),
        Err(ParseError::Format { .. })
    ));
    assert!(matches!(parse_line(""), Err(ParseError::EmptyInput { .. })));
}

#[test]
fn batch_is_all_or_nothing() {
    let err = process_basket(["1 book at 12.49", "invalid input", "1 music CD at 14.99"])
        .unwrap_err();
    assert!(matches!(err, CoreError::Basket { .. }));
    match err.root() {
        CoreError::Parse(ParseError::AtIndex { index, source }) => {
            assert_eq!(*index, 1);
            assert_eq!(source.input(), "invalid input");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[rstest]
#[case(
    "1 music CD at 10.004",
    "1 music CD: 11.05\nSales Taxes: 1.05\nTotal: 11.05"
)]
#[case(
    "9999999999 music CD at 9999999999.99",
    "9999999999 music CD: 10999999999.99\nSales Taxes: 9999999999000000000.00\nTotal: 109999999988900000000.01"
)]
#[case(
    "1 music CD at 92233720368547758.07",
    "1 music CD: 101457092405402533.92\nSales Taxes: 9223372036854775.85\nTotal: 101457092405402533.92"
)]
fn unusual_prices_are_taxed_exactly(#[case] line: &str, #[case] expected: &str) {
    assert_eq!(process_basket([line]).unwrap(), expected);
}

#[rstest]
#[case("1 music CD at 79228162514264337593543950335")]
#[case("2 book at 79228162514264337593543950335")]
#[case("1 imported book at 79228162514264337593543950335")]
fn overflow_is_an_error_not_a_panic(#[case] line: &str) {
    let err = process_basket([line]).unwrap_err();
    assert!(matches!(err.root(), CoreError::AmountOverflow { .. }));
    assert!(err.to_string().starts_with("failed to process basket:"));
}

#[test]
fn price_beyond_decimal_range_is_rejected() {
    let err = process_basket(["1 book at 79228162514264337593543950336"]).unwrap_err();
    assert!(matches!(
        err.root(),
        CoreError::Parse(ParseError::AtIndex { source, .. })
            if matches!(**source, ParseError::InvalidPrice { .. })
    ));
}

#[test]
fn zero_quantity_wins_over_oversized_price() {
    let err = parse_line("0 book at 99999999999999999999999").unwrap_err();
    assert!(matches!(err, ParseError::InvalidQuantity { .. }));
}
