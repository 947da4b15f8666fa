use std::io::{self, Read};

use spinebar::Codec;

fn main() {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text).unwrap();

    let mut codec = Codec::new();
    codec.read_text(text.trim_end_matches('\n')).unwrap();
    codec.encode();
    print!("{}", codec.render_image());
}
