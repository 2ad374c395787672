#![deny(warnings)]

use crate::scanner::Scanner;

static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];


impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    // scan unsigned decimals like [0-9]*(\.[0-9]*)?([eE][+-]?[0-9]+)?
    // requiring at least one digit before the exponent, eg: 3, 3., .5, 1.5e3
    pub fn scan_number(&mut self) -> Option<String> {
        let backtrack = self.pos();
        let int_part = self.skip_all(DIGITS);
        let frac_part = self.accept(&'.').is_some() && self.skip_all(DIGITS);
        if !int_part && !frac_part {
            self.set_pos(backtrack);
            return None;
        }
        // check for exponent part
        let backtrack = self.pos();
        if self.accept_any(&['e', 'E']).is_some() {
            self.accept_any(&['+', '-']); // exponent sign is optional
            if !self.skip_all(DIGITS) {
                self.set_pos(backtrack);
            }
        }
        Some(self.extract_string())
    }
}

///////////////////////////////////////////////////////////////////////////////
