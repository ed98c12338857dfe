//! Listing line parser

use crate::error::{ParseError, Result};
use crate::lexer::Token;
use logos::Logos;
use sdelay_spec::{Instruction, Line, Register};

/// Parse register name (`S0`-`Sf`, any case)
pub fn parse_register(name: &str, line: usize) -> Result<Register> {
    let invalid = || ParseError::InvalidRegister {
        line,
        name: name.to_string(),
    };

    let digit = name
        .strip_prefix(|c: char| c == 's' || c == 'S')
        .filter(|d| d.len() == 1)
        .ok_or_else(invalid)?;
    let index = usize::from_str_radix(digit, 16).map_err(|_| invalid())?;
    Register::from_index(index).ok_or_else(invalid)
}

/// Parse one listing line; blank lines yield `None`
///
/// `line` is the 1-based line number used in errors.
pub fn parse_line(text: &str, line: usize) -> Result<Option<Line>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(text);
    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push(token),
            Err(()) => {
                return Err(ParseError::SyntaxError {
                    line,
                    column: lexer.span().start + 1,
                    message: format!("Unexpected input: {}", lexer.slice()),
                })
            }
        }
    }

    // A trailing comment on an instruction or label carries no meaning
    if tokens.len() > 1 && matches!(tokens.last(), Some(Token::Comment(_))) {
        tokens.pop();
    }

    match tokens.as_slice() {
        [] => Ok(None),
        [Token::Comment(text)] => Ok(Some(Line::Comment(text.clone()))),
        [Token::Identifier(name), Token::Colon] => Ok(Some(Line::Label(name.clone()))),
        [Token::Identifier(mnemonic), operands @ ..] => {
            parse_instruction(mnemonic, operands, line).map(|i| Some(Line::Instruction(i)))
        }
        _ => Err(syntax(line, "Expected a comment, label or instruction")),
    }
}

fn parse_instruction(mnemonic: &str, operands: &[Token], line: usize) -> Result<Instruction> {
    match mnemonic.to_ascii_lowercase().as_str() {
        "load" => {
            let (reg, value) = parse_register_byte(operands, line)?;
            Ok(Instruction::Load { reg, value })
        }
        "add" => {
            let (reg, imm) = parse_register_byte(operands, line)?;
            Ok(Instruction::Add { reg, imm })
        }
        "jump" => match operands {
            [Token::Identifier(cond), Token::Comma, Token::Identifier(label)] => {
                if !cond.eq_ignore_ascii_case("nz") {
                    return Err(ParseError::UnsupportedCondition {
                        line,
                        condition: cond.clone(),
                    });
                }
                Ok(Instruction::JumpNz {
                    label: label.clone(),
                })
            }
            _ => Err(syntax(line, "Expected JUMP NZ, <label>")),
        },
        _ => Err(ParseError::UnknownInstruction {
            line,
            mnemonic: mnemonic.to_string(),
        }),
    }
}

/// Parse `<register>, <byte>` operands
fn parse_register_byte(operands: &[Token], line: usize) -> Result<(Register, u8)> {
    let (name, value) = match operands {
        [Token::Register(name), Token::Comma, Token::Hex(v)]
        | [Token::Register(name), Token::Comma, Token::Number(v)] => (name, *v),
        [Token::Identifier(name), Token::Comma, _] => {
            return Err(ParseError::InvalidRegister {
                line,
                name: name.clone(),
            })
        }
        _ => return Err(syntax(line, "Expected register and byte operands")),
    };

    let reg = parse_register(name, line)?;
    let value = u8::try_from(value).map_err(|_| ParseError::InvalidImmediate { line, value })?;
    Ok((reg, value))
}

fn syntax(line: usize, message: &str) -> ParseError {
    ParseError::SyntaxError {
        line,
        column: 0,
        message: message.to_string(),
    }
}
