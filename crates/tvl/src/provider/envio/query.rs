/// Active property tokens: every `PropertyToken` whose valuation is above zero.
///
/// The `> 0` filter is applied by the indexer; no local filtering happens.
pub const ACTIVE_PROPERTIES_QUERY: &str = r#"
  query ActivePropertyTokens {
    PropertyToken(
      where: { propertyValuation: { _gt: "0" } }
    ) {
      id
      contractAddress
      countryCode
      name
      symbol
      propertyValuation
    }
  }
"#;
