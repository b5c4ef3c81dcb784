use crate::CodecError;

type Result<T> = std::result::Result<T, CodecError>;

/// Reads positional package parameters front to back.
#[derive(Debug)]
pub struct ParamReader<'a> {
    params: &'a [f64],
    position: usize,
}

impl<'a> ParamReader<'a> {
    pub fn new(params: &'a [f64]) -> Self {
        Self {
            params,
            position: 0,
        }
    }

    pub fn next_f64(&mut self) -> Result<f64> {
        let value = self
            .params
            .get(self.position)
            .copied()
            .ok_or(CodecError::MissingParam(self.position + 1))?;
        self.position += 1;
        Ok(value)
    }

    /// Next parameter as a count; counts come over the wire as floats.
    pub fn next_count(&mut self) -> Result<u64> {
        let position = self.position + 1;
        let value = self.next_f64()?;
        if !value.is_finite()
            || value < 0.0
            || value.fract() != 0.0
            || value >= u64::MAX as f64
        {
            return Err(CodecError::InvalidCount { position, value });
        }

        Ok(value as u64)
    }

    pub fn remaining(&self) -> usize {
        self.params.len() - self.position
    }
}
