use super::ComplexNumber;

/// Circular and hyperbolic functions with `z = a + ib`.
///
/// The reciprocal functions use closed forms over `cosh 2b ∓ cos 2a` (or
/// `cosh 2a ∓ cos 2b`) instead of dividing one by the base function.
impl ComplexNumber {
    pub fn sin(&self) -> ComplexNumber {
        let (a, b) = (self.re, self.im);
        ComplexNumber::new(a.sin() * b.cosh(), a.cos() * b.sinh())
    }

    pub fn cos(&self) -> ComplexNumber {
        let (a, b) = (self.re, self.im);
        ComplexNumber::new(a.cos() * b.cosh(), -(a.sin() * b.sinh()))
    }

    pub fn tan(&self) -> ComplexNumber {
        self.sin() / self.cos()
    }

    pub fn cot(&self) -> ComplexNumber {
        let (a, b) = (self.re, self.im);
        let den = (2.0 * b).cosh() - (2.0 * a).cos();
        ComplexNumber::new((2.0 * a).sin() / den, -(2.0 * b).sinh() / den)
    }

    pub fn sec(&self) -> ComplexNumber {
        let (a, b) = (self.re, self.im);
        let den = (2.0 * b).cosh() + (2.0 * a).cos();
        ComplexNumber::new(
            2.0 * a.cos() * b.cosh() / den,
            2.0 * a.sin() * b.sinh() / den,
        )
    }

    pub fn cosec(&self) -> ComplexNumber {
        let (a, b) = (self.re, self.im);
        let den = (2.0 * b).cosh() - (2.0 * a).cos();
        ComplexNumber::new(
            2.0 * a.sin() * b.cosh() / den,
            -2.0 * a.cos() * b.sinh() / den,
        )
    }

    pub fn sinh(&self) -> ComplexNumber {
        let (a, b) = (self.re, self.im);
        ComplexNumber::new(a.sinh() * b.cos(), a.cosh() * b.sin())
    }

    pub fn cosh(&self) -> ComplexNumber {
        let (a, b) = (self.re, self.im);
        ComplexNumber::new(a.cosh() * b.cos(), a.sinh() * b.sin())
    }

    pub fn tanh(&self) -> ComplexNumber {
        self.sinh() / self.cosh()
    }

    pub fn coth(&self) -> ComplexNumber {
        let (a, b) = (self.re, self.im);
        let den = (2.0 * a).cosh() - (2.0 * b).cos();
        ComplexNumber::new((2.0 * a).sinh() / den, -(2.0 * b).sin() / den)
    }

    pub fn sech(&self) -> ComplexNumber {
        let (a, b) = (self.re, self.im);
        let den = (2.0 * a).cosh() + (2.0 * b).cos();
        ComplexNumber::new(
            2.0 * a.cosh() * b.cos() / den,
            -2.0 * a.sinh() * b.sin() / den,
        )
    }

    pub fn cosech(&self) -> ComplexNumber {
        let (a, b) = (self.re, self.im);
        let den = (2.0 * a).cosh() - (2.0 * b).cos();
        ComplexNumber::new(
            2.0 * a.sinh() * b.cos() / den,
            -2.0 * a.cosh() * b.sin() / den,
        )
    }
}
