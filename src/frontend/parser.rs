use crate::ast::{
    Assign, BinaryOp, BinaryOperator, Block, Compound, ConstDecl, Direction, Expression, For, If,
    Literal, LiteralValue, Program, Repeat, Statement, UnaryOp, UnaryOperator, VarDecl, VarRef,
    VarType, While,
};
use crate::ast::Position;
use crate::frontend::lexer::Lexer;
use crate::frontend::source::SourceContext;
use crate::frontend::token::{Token, TokenKind};
use crate::utils::config::parser::{MAX_NESTING_DEPTH, STATEMENT_DEPTH_COST};
use crate::utils::errors::{PascalError, PascalResult};
use tracing::debug;

// Binding powers, lowest first. Relational operators are non-associative:
// a second one at the same level is rejected rather than chained.
const OR_BP: (u8, u8) = (1, 2);
const AND_BP: (u8, u8) = (3, 4);
const NOT_OPERAND_BP: u8 = 5;
const RELATIONAL_BP: (u8, u8) = (7, 8);
const ADDITIVE_BP: (u8, u8) = (9, 10);
const MULTIPLICATIVE_BP: (u8, u8) = (11, 12);
const UMINUS_OPERAND_BP: u8 = 13;

fn binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    let op = match kind {
        TokenKind::Plus => BinaryOperator::Add,
        TokenKind::Minus => BinaryOperator::Sub,
        TokenKind::Mult => BinaryOperator::Mul,
        TokenKind::Divide => BinaryOperator::Divide,
        TokenKind::Div => BinaryOperator::Div,
        TokenKind::Mod => BinaryOperator::Mod,
        TokenKind::Equal => BinaryOperator::Equal,
        TokenKind::NotEqual => BinaryOperator::NotEqual,
        TokenKind::LessThan => BinaryOperator::Less,
        TokenKind::LessThanEqual => BinaryOperator::LessEqual,
        TokenKind::GreaterThan => BinaryOperator::Greater,
        TokenKind::GreaterThanEqual => BinaryOperator::GreaterEqual,
        TokenKind::And => BinaryOperator::And,
        TokenKind::Or => BinaryOperator::Or,
        _ => return None,
    };
    Some(op)
}

fn infix_binding_power(op: BinaryOperator) -> (u8, u8) {
    match op {
        BinaryOperator::Or => OR_BP,
        BinaryOperator::And => AND_BP,
        BinaryOperator::Add | BinaryOperator::Sub => ADDITIVE_BP,
        BinaryOperator::Mul
        | BinaryOperator::Divide
        | BinaryOperator::Div
        | BinaryOperator::Mod => MULTIPLICATIVE_BP,
        _ => RELATIONAL_BP,
    }
}

fn position_of(token: &Token) -> Position {
    Position::new(token.line, token.column)
}

pub struct Parser<'a> {
    context: SourceContext<'a>,
    lexer: Lexer<'a>,
    current: Option<Token>,
    last_pos: Position,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(context: SourceContext<'a>) -> Self {
        Self {
            context,
            lexer: Lexer::new(context),
            current: None,
            last_pos: Position::new(1, 1),
            depth: 0,
        }
    }

    /// Parse the whole source into a `Program`. Each call rescans from the
    /// start, so repeated calls yield equal trees.
    pub fn parse(&mut self) -> PascalResult<Program> {
        self.lexer.reset();
        self.current = None;
        self.last_pos = Position::new(1, 1);
        self.depth = 0;
        self.next()?;
        debug!("parsing program");
        let program = self.program()?;
        debug!(name = %program.name, statements = program.block.statements.len(), "parse complete");
        Ok(program)
    }

    fn next(&mut self) -> PascalResult<()> {
        self.current = self.lexer.next().transpose()?;
        if let Some(token) = &self.current {
            self.last_pos = position_of(token);
        }
        Ok(())
    }

    fn check(&self, kind: &TokenKind) -> bool {
        matches!(&self.current, Some(token) if token.kind.same_variant(kind))
    }

    /// Error for the current token, or for running out of input
    fn unexpected(&self) -> PascalError {
        match &self.current {
            Some(token) => self.context.unexpected(token),
            None => PascalError::unexpected_eof(),
        }
    }

    fn expect(&mut self, kind: TokenKind) -> PascalResult<Token> {
        if !self.check(&kind) {
            return Err(self.unexpected());
        }
        match self.current.take() {
            Some(token) => {
                self.next()?;
                Ok(token)
            }
            None => Err(PascalError::unexpected_eof()),
        }
    }

    fn expect_ident(&mut self) -> PascalResult<(String, Position)> {
        let token = self.expect(TokenKind::Ident(String::new()))?;
        let pos = position_of(&token);
        match token.kind {
            TokenKind::Ident(name) => Ok((name, pos)),
            _ => Err(self.context.unexpected(&token)),
        }
    }

    fn current_pos(&self) -> PascalResult<Position> {
        self.current
            .as_ref()
            .map(position_of)
            .ok_or_else(PascalError::unexpected_eof)
    }

    fn enter(&mut self, cost: usize) -> PascalResult<()> {
        self.depth += cost;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(PascalError::internal(format!(
                "nesting exceeds depth budget of {} at line {}",
                MAX_NESTING_DEPTH, self.last_pos.line
            )));
        }
        Ok(())
    }

    fn leave(&mut self, cost: usize) {
        self.depth = self.depth.saturating_sub(cost);
    }

    /**
     * program = "program" ID ";" block "."
     */
    fn program(&mut self) -> PascalResult<Program> {
        let keyword = self.expect(TokenKind::Program)?;
        let (name, _) = self.expect_ident()?;
        self.expect(TokenKind::Semicolon)?;
        let block = self.block()?;
        self.expect(TokenKind::Dot)?;
        if self.current.is_some() {
            return Err(self.unexpected());
        }
        Ok(Program::new(name, block, position_of(&keyword)))
    }

    /**
     * block = { const_decl | var_decl } "begin" statement_seq "end"
     */
    fn block(&mut self) -> PascalResult<Block> {
        let pos = self.current_pos()?;
        let mut consts = Vec::new();
        let mut vars = Vec::new();
        loop {
            if self.check(&TokenKind::Const) {
                consts.push(self.const_decl()?);
            } else if self.check(&TokenKind::Var) {
                vars.extend(self.var_decl()?);
            } else {
                break;
            }
        }
        self.expect(TokenKind::Begin)?;
        let statements = self.statement_seq()?;
        self.expect(TokenKind::End)?;
        Ok(Block::new(consts, vars, statements, pos))
    }

    fn const_decl(&mut self) -> PascalResult<ConstDecl> {
        let keyword = self.expect(TokenKind::Const)?;
        let (name, _) = self.expect_ident()?;
        self.expect(TokenKind::Equal)?;
        let value = self.literal()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(ConstDecl::new(name, value, position_of(&keyword)))
    }

    fn var_decl(&mut self) -> PascalResult<Vec<VarDecl>> {
        let keyword = self.expect(TokenKind::Var)?;
        let pos = position_of(&keyword);
        let mut names = vec![self.expect_ident()?.0];
        while self.check(&TokenKind::Comma) {
            self.next()?;
            names.push(self.expect_ident()?.0);
        }
        self.expect(TokenKind::Colon)?;
        let var_type = self.var_type()?;
        self.expect(TokenKind::Semicolon)?;
        Ok(names
            .into_iter()
            .map(|name| VarDecl::new(name, var_type, pos))
            .collect())
    }

    fn var_type(&mut self) -> PascalResult<VarType> {
        let var_type = match self.current.as_ref().map(|t| &t.kind) {
            Some(TokenKind::Integer) => VarType::Integer,
            Some(TokenKind::Real) => VarType::Real,
            Some(TokenKind::Boolean) => VarType::Boolean,
            _ => return Err(self.unexpected()),
        };
        self.next()?;
        Ok(var_type)
    }

    fn literal(&mut self) -> PascalResult<Literal> {
        let (value, pos) = match &self.current {
            Some(token) => {
                let value = match &token.kind {
                    TokenKind::IntConst(n) => LiteralValue::Integer(*n),
                    TokenKind::RealConst(r) => LiteralValue::Real(*r),
                    TokenKind::BoolConst(b) => LiteralValue::Boolean(*b),
                    _ => return Err(self.unexpected()),
                };
                (value, position_of(token))
            }
            None => return Err(PascalError::unexpected_eof()),
        };
        self.next()?;
        Ok(Literal::new(value, pos))
    }

    /**
     * statement_seq = statement { ";" statement }
     * Empty slots between semicolons are parsed and then dropped.
     */
    fn statement_seq(&mut self) -> PascalResult<Vec<Statement>> {
        let mut statements = vec![self.statement()?];
        while self.check(&TokenKind::Semicolon) {
            self.next()?;
            statements.push(self.statement()?);
        }
        statements.retain(|stmt| !stmt.is_empty());
        Ok(statements)
    }

    fn statement(&mut self) -> PascalResult<Statement> {
        self.enter(STATEMENT_DEPTH_COST)?;
        let kind = self.current.as_ref().map(|t| t.kind.clone());
        let stmt = match kind {
            Some(TokenKind::Ident(_)) => self.assignment()?,
            Some(TokenKind::If) => self.if_stmt()?,
            Some(TokenKind::While) => self.while_stmt()?,
            Some(TokenKind::For) => self.for_stmt()?,
            Some(TokenKind::Repeat) => self.repeat_stmt()?,
            Some(TokenKind::Begin) => self.compound_stmt()?,
            _ => Statement::Empty(self.last_pos),
        };
        self.leave(STATEMENT_DEPTH_COST);
        Ok(stmt)
    }

    fn assignment(&mut self) -> PascalResult<Statement> {
        let (name, pos) = self.expect_ident()?;
        self.expect(TokenKind::Assign)?;
        let value = self.expression()?;
        Ok(Statement::Assign(Assign::new(VarRef::new(name, pos), value)))
    }

    fn if_stmt(&mut self) -> PascalResult<Statement> {
        let keyword = self.expect(TokenKind::If)?;
        let condition = self.expression()?;
        self.expect(TokenKind::Then)?;
        let then_stmt = self.statement()?;
        // A trailing else binds to the nearest if
        let else_stmt = if self.check(&TokenKind::Else) {
            self.next()?;
            Some(self.statement()?)
        } else {
            None
        };
        Ok(Statement::If(If::new(condition, then_stmt, else_stmt, position_of(&keyword))))
    }

    fn while_stmt(&mut self) -> PascalResult<Statement> {
        let keyword = self.expect(TokenKind::While)?;
        let condition = self.expression()?;
        self.expect(TokenKind::Do)?;
        let body = self.statement()?;
        Ok(Statement::While(While::new(condition, body, position_of(&keyword))))
    }

    fn for_stmt(&mut self) -> PascalResult<Statement> {
        let keyword = self.expect(TokenKind::For)?;
        let (name, var_pos) = self.expect_ident()?;
        self.expect(TokenKind::Assign)?;
        let start = self.expression()?;
        let direction = match self.current.as_ref().map(|t| &t.kind) {
            Some(TokenKind::To) => Direction::To,
            Some(TokenKind::Downto) => Direction::Downto,
            _ => return Err(self.unexpected()),
        };
        self.next()?;
        let end = self.expression()?;
        self.expect(TokenKind::Do)?;
        let body = self.statement()?;
        Ok(Statement::For(For::new(
            VarRef::new(name, var_pos),
            start,
            direction,
            end,
            body,
            position_of(&keyword),
        )))
    }

    fn repeat_stmt(&mut self) -> PascalResult<Statement> {
        let keyword = self.expect(TokenKind::Repeat)?;
        let body = self.statement_seq()?;
        self.expect(TokenKind::Until)?;
        let condition = self.expression()?;
        Ok(Statement::Repeat(Repeat::new(body, condition, position_of(&keyword))))
    }

    fn compound_stmt(&mut self) -> PascalResult<Statement> {
        let keyword = self.expect(TokenKind::Begin)?;
        let statements = self.statement_seq()?;
        self.expect(TokenKind::End)?;
        Ok(Statement::Compound(Compound::new(statements, position_of(&keyword))))
    }

    pub fn expression(&mut self) -> PascalResult<Expression> {
        self.expression_bp(0)
    }

    /// Precedence climbing: keep folding infix operators whose left
    /// binding power is at least `min_bp`.
    fn expression_bp(&mut self, min_bp: u8) -> PascalResult<Expression> {
        self.enter(1)?;
        let mut charged = 1;
        let mut lhs = self.prefix()?;
        let mut after_relational = false;
        loop {
            let (op, pos) = match &self.current {
                Some(token) => match binary_operator(&token.kind) {
                    Some(op) => (op, position_of(token)),
                    None => break,
                },
                None => break,
            };
            let (l_bp, r_bp) = infix_binding_power(op);
            if l_bp < min_bp {
                break;
            }
            if op.is_relational() && after_relational {
                return Err(self.unexpected());
            }
            self.next()?;
            let rhs = self.expression_bp(r_bp)?;
            after_relational = op.is_relational();
            lhs = Expression::BinaryOp(BinaryOp::new(op, lhs, rhs, pos));
            // Each fold deepens the tree along its left spine
            self.enter(1)?;
            charged += 1;
        }
        self.leave(charged);
        Ok(lhs)
    }

    fn prefix(&mut self) -> PascalResult<Expression> {
        let token = match self.current.take() {
            Some(token) => token,
            None => return Err(PascalError::unexpected_eof()),
        };
        let pos = position_of(&token);
        let expr = match token.kind {
            TokenKind::Minus => {
                self.next()?;
                let operand = self.expression_bp(UMINUS_OPERAND_BP)?;
                Expression::UnaryOp(UnaryOp::new(UnaryOperator::Minus, operand, pos))
            }
            TokenKind::Not => {
                self.next()?;
                let operand = self.expression_bp(NOT_OPERAND_BP)?;
                Expression::UnaryOp(UnaryOp::new(UnaryOperator::Not, operand, pos))
            }
            TokenKind::LParen => {
                self.next()?;
                let inner = self.expression_bp(0)?;
                self.expect(TokenKind::RParen)?;
                inner
            }
            TokenKind::IntConst(n) => {
                self.next()?;
                Expression::Literal(Literal::new(LiteralValue::Integer(n), pos))
            }
            TokenKind::RealConst(r) => {
                self.next()?;
                Expression::Literal(Literal::new(LiteralValue::Real(r), pos))
            }
            TokenKind::BoolConst(b) => {
                self.next()?;
                Expression::Literal(Literal::new(LiteralValue::Boolean(b), pos))
            }
            TokenKind::Ident(name) => {
                self.next()?;
                Expression::VarRef(VarRef::new(name, pos))
            }
            _ => {
                let err = self.context.unexpected(&token);
                self.current = Some(token);
                return Err(err);
            }
        };
        Ok(expr)
    }
}

// Convenience function: parse `source` in one call
pub fn parse(source: &str) -> PascalResult<Program> {
    Parser::new(SourceContext::new(source)).parse()
}
