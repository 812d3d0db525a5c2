use mset_core::Multiset;

fn main() {
    let text = "the quick brown fox jumps over the lazy dog while the dog naps";
    let words: Multiset<&str> = text.split_whitespace().collect();

    let mut rows: Vec<(&str, usize)> = words.iter().map(|(w, n)| (*w, n)).collect();
    rows.sort();

    for (word, n) in rows {
        println!("{:>2}  {}", n, word);
    }
    println!("{} distinct words, {} total", words.len(), words.cardinality());
}
