use pascalc::ast::{LiteralValue, Position, VarType};
use pascalc::errors::{PascalError, PascalResult};
use pascalc::frontend::parser::parse;
use pascalc::semantic::{analyze, Analyzer, Symbol, SymbolTable, SymbolType};

#[test]
fn test_symbol_table_insert_and_get() -> PascalResult<()> {
    let mut table = SymbolTable::new();
    assert!(table.is_empty());
    table.add_symbol(
        "count",
        Symbol::new(SymbolType::Variable(VarType::Integer), Position::new(2, 1)),
    )?;
    assert!(table.exists("count"));
    assert!(!table.exists("Count"));
    let symbol = table.get_symbol("count").expect("symbol was added");
    assert_eq!(symbol.symbol_type, SymbolType::Variable(VarType::Integer));
    assert_eq!(symbol.declared_at, Position::new(2, 1));
    Ok(())
}

#[test]
fn test_symbol_table_rejects_redeclaration() -> PascalResult<()> {
    let mut table = SymbolTable::new();
    table.add_symbol(
        "limit",
        Symbol::new(SymbolType::Constant(LiteralValue::Integer(3)), Position::new(1, 1)),
    )?;
    let result = table.add_symbol(
        "limit",
        Symbol::new(SymbolType::Variable(VarType::Real), Position::new(4, 5)),
    );
    match result {
        Err(PascalError::Semantic { message, line, col }) => {
            assert_eq!(message, "variable already declared: limit");
            assert_eq!((line, col), (4, 5));
        }
        other => panic!("Expected a semantic error, but got: {:?}", other),
    }
    assert_eq!(table.len(), 1);
    Ok(())
}

#[test]
fn test_analyzer_collects_all_duplicates() -> PascalResult<()> {
    let program = parse(
        "program p;
const n = 1;
var n, m : integer;
var m : boolean;
begin
  if true then begin m := n end
end.",
    )?;
    let (table, errors) = Analyzer::new().analyze(&program);
    assert_eq!(table.len(), 2);
    let positions: Vec<_> = errors.iter().filter_map(|e| e.position()).collect();
    assert_eq!(positions, vec![(3, 1), (4, 1)]);
    Ok(())
}

#[test]
fn test_clean_program_has_no_errors() -> PascalResult<()> {
    let program = parse("program p; var x : real; begin repeat x := x / 2 until x < 1.0 end.")?;
    assert!(analyze(&program).is_empty());
    Ok(())
}
