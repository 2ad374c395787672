#![deny(warnings)]

pub struct Scanner<I: Iterator> where I::Item: Clone {
    src: I,
    buf: Vec<I::Item>,
    pos: isize,
}

impl<I> Iterator for Scanner<I> where I: Iterator, I::Item: Clone {
    type Item = I::Item;
    // advancing past the end parks the cursor one slot after the last item
    fn next(&mut self) -> Option<Self::Item> {
        let wanted = self.pos + 1;
        self.pos = wanted.min(self.fill(wanted));
        self.curr()
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone {
    pub fn new(source: I) -> Scanner<I> {
        Scanner{src: source, buf: Vec::new(), pos: -1}
    }

    pub fn pos(&self) -> isize { self.pos }

    pub fn set_pos(&mut self, pos: isize) -> bool {
        if pos < -1 || pos > (self.buf.len() as isize) {
            return false;
        }
        self.pos = pos;
        true
    }

    pub fn curr(&self) -> Option<I::Item> {
        let pos = self.pos as usize;
        if self.pos < 0 || pos >= self.buf.len() {
            return None;
        }
        Some(self.buf[pos].clone())
    }

    // buffer items up to index `upto`, returns the buffered length
    fn fill(&mut self, upto: isize) -> isize {
        while upto >= self.buf.len() as isize {
            match self.src.next() {
                Some(item) => self.buf.push(item),
                None => break,
            }
        }
        self.buf.len() as isize
    }

    /// Consume the next item only when `pred` holds for it.
    pub fn accept_if<F>(&mut self, pred: F) -> Option<I::Item>
    where F: FnOnce(&I::Item) -> bool {
        let matched = match self.peek() {
            Some(ref item) => pred(item),
            None => false,
        };
        if matched { self.next() } else { None }
    }

    /// Consume items while `pred` holds, true if any was consumed.
    pub fn skip_while<F>(&mut self, pred: F) -> bool
    where F: Fn(&I::Item) -> bool {
        let start = self.pos;
        while self.accept_if(&pred).is_some() {}
        self.pos > start
    }

    pub fn peek(&mut self) -> Option<I::Item> {
        let backtrack = self.pos;
        let peeked = self.next();
        self.pos = backtrack;
        peeked
    }

    /// Items consumed since the last `ignore`/`extract`.
    pub fn view(&self) -> &[I::Item] {
        let n = (self.pos + 1).max(0) as usize;
        &self.buf[..n.min(self.buf.len())]
    }

    /// Drop everything up to the current position and restart from there.
    pub fn ignore(&mut self) {
        if self.pos >= 0 {
            let n = ((self.pos + 1) as usize).min(self.buf.len());
            self.buf.drain(..n);
        }
        self.pos = -1;
    }

    pub fn extract(&mut self) -> Vec<I::Item> {
        let items = self.view().to_vec();
        self.ignore();
        items
    }
}

impl<I> Scanner<I> where I: Iterator, I::Item: Clone + PartialEq {
    pub fn accept(&mut self, what: &I::Item) -> Option<I::Item> {
        self.accept_if(|item| item == what)
    }

    // on a match self.curr() is the accepted item
    pub fn accept_any(&mut self, any: &[I::Item]) -> Option<I::Item> {
        self.accept_if(|item| any.contains(item))
    }

    // afterwards self.curr() is the last item of the 'over' run
    pub fn skip_all(&mut self, over: &[I::Item]) -> bool {
        self.skip_while(|item| over.contains(item))
    }

    // stops right before an item of the 'any' set or at EOF,
    // self.curr() is left on the last item outside the set
    pub fn until_any(&mut self, any: &[I::Item]) -> bool {
        self.skip_while(|item| !any.contains(item))
    }
}
