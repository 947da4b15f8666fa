use spinebar::{Codec, Grid};

// Two hand-drawn patterns, deliberately not anchored to any corner of
// the canvas. Scanning normalizes them before decoding.
const SECRET_1: [&str; 16] = [
    "                                               ",
    "                                               ",
    "                                               ",
    "     * * * * * * * * * * * * * * * * * * * * * ",
    "     *                                       * ",
    "     ****** **** ****** ******* ** *** *****   ",
    "     *     *    ****************************** ",
    "     * **    * *        **  *    * * *   *     ",
    "     *   *    *  *****    *   * *   *  **  *** ",
    "     *  **     * *** **   **  *    **  ***  *  ",
    "     ***  * **   **  *   ****    *  *  ** * ** ",
    "     *****  ***  *  * *   ** ** **  *   * *    ",
    "     ***************************************** ",
    "                                               ",
    "                                               ",
    "                                               ",
];

const SECRET_2: [&str; 16] = [
    "                                          ",
    "                                          ",
    "* * * * * * * * * * * * * * * * * * *     ",
    "*                                    *    ",
    "**** *** **   ***** ****   *********      ",
    "* ************ ************ **********    ",
    "** *      *    *  * * *         * *       ",
    "***   *  *           * **    *      **    ",
    "* ** * *  *   * * * **  *   ***   ***     ",
    "* *           **    *****  *   **   **    ",
    "****  *  * *  * **  ** *   ** *  * *      ",
    "**************************************    ",
    "                                          ",
    "                                          ",
    "                                          ",
    "                                          ",
];

fn show(codec: &Codec) {
    println!("{}", codec.text());
    println!("{}", codec.render_image());
}

fn main() {
    let mut codec = Codec::new();

    for rows in [&SECRET_1[..], &SECRET_2[..]] {
        let grid = Grid::from_rows(rows).unwrap();
        codec.scan(&grid);
        codec.decode();
        show(&codec);
    }

    for message in [
        "What a great resume builder this is!",
        "Test message: Osprey Corp is the best Corp",
    ] {
        codec.read_text(message).unwrap();
        codec.encode();
        show(&codec);
    }
}
