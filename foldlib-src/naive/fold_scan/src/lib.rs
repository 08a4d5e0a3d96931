use merger::Merger;

/// Left-to-right fold of a non-empty slice.
pub fn fold_scan<M: Merger>(merger: &M, a: &[M::Set]) -> Option<M::Set>
where
    M::Set: Clone,
{
    let (first, rest) = a.split_first()?;
    Some(rest.iter().fold(first.clone(), |acc, x| merger.merge(&acc, x)))
}

pub struct NaiveFold<M: Merger> {
    buf: Vec<M::Set>,
    merger: M,
}

impl<M: Merger> NaiveFold<M>
where
    M::Set: Clone,
{
    pub fn new(buf: Vec<M::Set>, merger: M) -> Self { Self { buf, merger } }
    pub fn len(&self) -> usize { self.buf.len() }
    pub fn is_empty(&self) -> bool { self.buf.is_empty() }
    pub fn get(&self, i: usize) -> Option<&M::Set> { self.buf.get(i) }
    pub fn set(&mut self, i: usize, x: M::Set) { self.buf[i] = x; }
    pub fn query(&self, l: usize, r: usize) -> Option<M::Set> {
        fold_scan(&self.merger, self.buf.get(l..=r)?)
    }
}

impl<M: Merger + Default> From<Vec<M::Set>> for NaiveFold<M>
where
    M::Set: Clone,
{
    fn from(buf: Vec<M::Set>) -> Self { Self::new(buf, M::default()) }
}

#[test]
fn sanity_check() {
    use op_add::OpAdd;

    let op_add = OpAdd::<i32>::default();
    assert_eq!(fold_scan(&op_add, &[]), None);
    assert_eq!(fold_scan(&op_add, &[3]), Some(3));
    assert_eq!(fold_scan(&op_add, &[3, 1, 4]), Some(8));

    let mut naive: NaiveFold<OpAdd<i32>> = vec![1, 2, 3, 4, 5].into();
    assert_eq!(naive.query(1, 3), Some(9));
    assert_eq!(naive.query(3, 1), None);
    assert_eq!(naive.query(0, 5), None);
    naive.set(2, 10);
    assert_eq!(naive.get(2), Some(&10));
    assert_eq!(naive.query(0, 4), Some(22));
}
