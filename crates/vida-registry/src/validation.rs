use thiserror::Error;

/// Minimum number of digits (area code included) once formatting is stripped.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Characters allowed as phone formatting; removed before counting digits.
pub const PHONE_FORMATTING_CHARS: [char; 5] = ['(', ')', '-', ' ', '+'];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Erro: A idade deve ser um número inteiro. Tente novamente.")]
    AgeNotInteger,
    #[error("Por favor, insira uma idade válida (número maior que zero).")]
    AgeNotPositive,
    #[error("Erro: A idade informada é grande demais.")]
    AgeOutOfRange,
    #[error("Erro: O telefone deve conter apenas números e caracteres de formatação ( ), -, +.")]
    PhoneInvalidCharacters,
    #[error(
        "Erro: O telefone parece curto. Insira pelo menos {min} dígitos (incluindo DDD).",
        min = MIN_PHONE_DIGITS
    )]
    PhoneTooShort,
}

/// Accepts an optionally signed run of ASCII digits of any length.
///
/// Whether the text is an integer is decided by its shape, so a huge
/// negative number is still "not positive" rather than "not an integer".
pub fn parse_age(input: &str) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::AgeNotInteger);
    }

    let significant = digits.trim_start_matches('0');
    if negative || significant.is_empty() {
        return Err(ValidationError::AgeNotPositive);
    }
    significant
        .parse::<u32>()
        .map_err(|_| ValidationError::AgeOutOfRange)
}

pub fn strip_phone_formatting(input: &str) -> String {
    input
        .chars()
        .filter(|c| !PHONE_FORMATTING_CHARS.contains(c))
        .collect()
}

/// Checks a phone number and hands back the original text, formatting intact.
pub fn validate_phone(input: &str) -> Result<String, ValidationError> {
    let digits = strip_phone_formatting(input);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PhoneInvalidCharacters);
    }
    if digits.len() < MIN_PHONE_DIGITS {
        return Err(ValidationError::PhoneTooShort);
    }
    Ok(input.to_string())
}
