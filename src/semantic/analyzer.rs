use crate::ast::{Block, Expression, Program, Statement};
use crate::semantic::symboltable::{Symbol, SymbolTable, SymbolType};
use crate::utils::errors::PascalError;
use tracing::debug;

/// Declaration checker. Walks the whole tree so that further rules can be
/// added per variant; today it only reports names declared twice.
#[derive(Debug, Default)]
pub struct Analyzer {
    table: SymbolTable,
    errors: Vec<PascalError>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analyze(mut self, program: &Program) -> (SymbolTable, Vec<PascalError>) {
        self.visit_block(&program.block);
        debug!(symbols = self.table.len(), errors = self.errors.len(), "semantic analysis done");
        (self.table, self.errors)
    }

    fn declare(&mut self, name: &str, symbol: Symbol) {
        if let Err(err) = self.table.add_symbol(name, symbol) {
            self.errors.push(err);
        }
    }

    fn visit_block(&mut self, block: &Block) {
        for decl in &block.consts {
            self.declare(
                &decl.name,
                Symbol::new(SymbolType::Constant(decl.value.value.clone()), decl.pos),
            );
        }
        for decl in &block.vars {
            self.declare(&decl.name, Symbol::new(SymbolType::Variable(decl.var_type), decl.pos));
        }
        for stmt in &block.statements {
            self.visit_statement(stmt);
        }
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Assign(assign) => self.visit_expression(&assign.value),
            Statement::If(s) => {
                self.visit_expression(&s.condition);
                self.visit_statement(&s.then_stmt);
                if let Some(else_stmt) = &s.else_stmt {
                    self.visit_statement(else_stmt);
                }
            }
            Statement::While(s) => {
                self.visit_expression(&s.condition);
                self.visit_statement(&s.body);
            }
            Statement::For(s) => {
                self.visit_expression(&s.start);
                self.visit_expression(&s.end);
                self.visit_statement(&s.body);
            }
            Statement::Repeat(s) => {
                for inner in &s.body {
                    self.visit_statement(inner);
                }
                self.visit_expression(&s.condition);
            }
            Statement::Compound(s) => {
                for inner in &s.statements {
                    self.visit_statement(inner);
                }
            }
            Statement::Empty(_) => {}
        }
    }

    fn visit_expression(&mut self, expr: &Expression) {
        match expr {
            Expression::BinaryOp(e) => {
                self.visit_expression(&e.left);
                self.visit_expression(&e.right);
            }
            Expression::UnaryOp(e) => self.visit_expression(&e.operand),
            Expression::VarRef(_) | Expression::Literal(_) => {}
        }
    }
}

/// Run the declaration checker over `program`
pub fn analyze(program: &Program) -> Vec<PascalError> {
    Analyzer::new().analyze(program).1
}
