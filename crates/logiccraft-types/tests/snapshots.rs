//! JSON shape snapshots for the receipt types consumed by the playground UI.

use logiccraft_types::{BigO, ComplexityResult};

#[test]
fn complexity_result_json_shape() {
    let result = ComplexityResult::from_classes(BigO::Quadratic, BigO::Constant, 91, 4);
    insta::assert_json_snapshot!(result, @r#"
    {
      "time": "O(N²)",
      "space": "O(1)",
      "maintainability": 91,
      "cyclomatic": 4
    }
    "#);
}

#[test]
fn baseline_json_shape() {
    insta::assert_json_snapshot!(ComplexityResult::baseline(), @r#"
    {
      "time": "O(1)",
      "space": "O(1)",
      "maintainability": 100,
      "cyclomatic": 1
    }
    "#);
}
