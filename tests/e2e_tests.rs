//! End-to-end integration tests
//!
//! These tests validate the complete pricing pipeline using predefined CSV
//! pricing matrix fixtures. Each successful fixture:
//! 1. Reads input.csv from a fixture directory
//! 2. Builds a pricing table from it
//! 3. Dumps the table as CSV
//! 4. Compares the dump with expected.csv
//!
//! Error fixtures only have an input.csv and must fail to build with a
//! specific error.
//!
//! Test fixtures are located in tests/fixtures/ and cover:
//! - Single region and multi region matrices
//! - Currency overrides and quoted country names containing commas
//! - CRLF line endings, blank lines and padded cells
//! - Malformed headers, unknown regions and tiers, invalid prices

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal::Decimal;
    use std::fs;
    use std::path::Path;
    use tier_pricing::io::reader::read_pricing_matrix;
    use tier_pricing::{build, write_price_table_csv, Locale, PricingTable, Tier};

    fn fixture_path(fixture_name: &str, file: &str) -> String {
        format!("tests/fixtures/{}/{}", fixture_name, file)
    }

    fn load_fixture_table(fixture_name: &str) -> PricingTable {
        let input_path = fixture_path(fixture_name, "input.csv");
        read_pricing_matrix(Path::new(&input_path))
            .unwrap_or_else(|e| panic!("Failed to build {}: {}", input_path, e))
            .table
    }

    fn locale(identifier: &str) -> Locale {
        Locale::parse(identifier).unwrap()
    }

    /// Run a fixture by building input.csv and comparing the dump with expected.csv
    fn run_test_fixture(fixture_name: &str) {
        let expected_path = fixture_path(fixture_name, "expected.csv");
        assert!(
            Path::new(&expected_path).exists(),
            "Expected file not found: {}",
            expected_path
        );

        let table = load_fixture_table(fixture_name);

        let mut output = Vec::new();
        write_price_table_csv(&table, &mut output)
            .unwrap_or_else(|e| panic!("Failed to write table: {}", e));
        let actual_output = String::from_utf8(output).expect("Output is not UTF-8");

        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {}\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, actual_output, expected_output
        );
    }

    #[rstest]
    #[case("single_region")]
    #[case("currency_override")]
    #[case("multi_region")]
    #[case("crlf_and_whitespace")]
    #[case("repeated_tier")]
    fn test_fixtures(#[case] fixture: &str) {
        run_test_fixture(fixture);
    }

    #[rstest]
    #[case("header_only", "Pricing matrix needs at least 2 rows, found 1")]
    #[case("malformed_header", "Malformed locale header in column 3: 'Spain'")]
    #[case("unknown_region", "Unknown region 'Narnia' in column 3")]
    #[case("unknown_tier", "Unknown tier 'Alternate Tier A' at line 5")]
    #[case("invalid_price", "Invalid price '1,09' at line 4, column 1")]
    fn test_error_fixtures(#[case] fixture: &str, #[case] expected_error: &str) {
        let input_path = fixture_path(fixture, "input.csv");
        let result = read_pricing_matrix(Path::new(&input_path));

        match result {
            Ok(matrix) => panic!(
                "Fixture {} should fail to build, got {} regions",
                fixture,
                matrix.table.region_count()
            ),
            Err(e) => assert_eq!(e.to_string(), expected_error),
        }
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(build("").is_err());
    }

    #[rstest]
    #[case(Tier::Free, "en_US", "0.00", "US", "USD")]
    #[case(Tier::Tier1, "en_US", "0.99", "US", "USD")]
    #[case(Tier::Tier1, "ko_KR", "0.99", "KR", "USD")]
    #[case(Tier::Tier2, "ja_JP", "250", "JP", "JPY")]
    #[case(Tier::Tier3, "fr-FR", "3.49", "FR", "EUR")]
    #[case(Tier::Tier1, "zh_Hant_HK", "8.00", "HK", "HKD")]
    fn test_multi_region_queries(
        #[case] tier: Tier,
        #[case] identifier: &str,
        #[case] amount: &str,
        #[case] region: &str,
        #[case] currency: &str,
    ) {
        let table = load_fixture_table("multi_region");

        let price = table.get_price(tier, &locale(identifier)).unwrap();
        assert_eq!(price.amount.to_string(), amount);
        assert_eq!(price.locale.region().as_str(), region);
        assert_eq!(price.locale.currency().as_str(), currency);
    }

    #[rstest]
    #[case::unsupported_region(Tier::Tier1, "de_DE")]
    #[case::tier_not_in_matrix(Tier::Tier4, "en_US")]
    #[case::language_only(Tier::Free, "en")]
    fn test_absent_prices_are_none(#[case] tier: Tier, #[case] identifier: &str) {
        let table = load_fixture_table("multi_region");
        assert_eq!(table.get_price(tier, &locale(identifier)), None);
    }

    #[test]
    fn test_quoted_country_with_comma_is_one_region() {
        let table = load_fixture_table("multi_region");

        assert_eq!(table.region_count(), 5);
        let korea = table.get_price(Tier::Tier2, &locale("ko_KR")).unwrap();
        assert_eq!(korea.locale.identifier(), "en_KR@currency=USD");
    }

    #[test]
    fn test_building_twice_answers_identically() {
        let input = fs::read_to_string(fixture_path("multi_region", "input.csv")).unwrap();

        let first = build(&input).unwrap();
        let second = build(&input).unwrap();

        assert_eq!(first, second);
        for tier in Tier::ALL {
            for identifier in ["en_US", "ko_KR", "ja_JP", "fr_FR", "zh_HK", "de_DE"] {
                assert_eq!(
                    first.get_price(*tier, &locale(identifier)),
                    second.get_price(*tier, &locale(identifier))
                );
            }
        }
    }

    #[test]
    fn test_equivalent_price_across_regions() {
        let table = load_fixture_table("multi_region");

        let yen = table
            .equivalent_price(Decimal::new(299, 2), &locale("en_US"), &locale("ja_JP"))
            .unwrap();
        assert_eq!(yen.amount, Decimal::new(370, 0));

        let euro = table
            .equivalent_price(Decimal::new(120, 0), &locale("ja_JP"), &locale("fr_FR"))
            .unwrap();
        assert_eq!(euro.amount, Decimal::new(109, 2));
        assert_eq!(euro.locale.currency().as_str(), "EUR");
    }

    #[test]
    fn test_fixture_provenance_absent_for_plain_names() {
        let input_path = fixture_path("single_region", "input.csv");
        let matrix = read_pricing_matrix(Path::new(&input_path)).unwrap();
        assert_eq!(matrix.provenance, None);
    }
}
