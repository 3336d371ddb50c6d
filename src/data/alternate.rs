// src/data/alternate.rs
//! Non-standard settings.
//!
//! Names carry the full Hermann-Mauguin symbol of the setting. Origin choice
//! is marked with a `:1` / `:2` suffix, rhombohedral axes with `:R`.

use super::setting;
use super::SpaceGroupEntry;

pub const ALTERNATE: &[SpaceGroupEntry] = &[
  // --- Monoclinic: unique axes c and a, cell choices 2 and 3 ---
  setting!(3, "P 1 1 2", "P 2"),
  setting!(3, "P 2 1 1", "P 2x"),
  setting!(4, "P 1 1 21", "P 2c"),
  setting!(4, "P 21 1 1", "P 2xa"),
  setting!(5, "A 1 2 1", "A 2y"),
  setting!(5, "I 1 2 1", "I 2y"),
  setting!(5, "A 1 1 2", "A 2"),
  setting!(5, "B 1 1 2", "B 2"),
  setting!(5, "I 1 1 2", "I 2"),
  setting!(5, "B 2 1 1", "B 2x"),
  setting!(5, "C 2 1 1", "C 2x"),
  setting!(5, "I 2 1 1", "I 2x"),
  setting!(6, "P 1 1 m", "P -2"),
  setting!(6, "P m 1 1", "P -2x"),
  setting!(7, "P 1 n 1", "P -2yac"),
  setting!(7, "P 1 a 1", "P -2ya"),
  setting!(7, "P 1 1 a", "P -2a"),
  setting!(7, "P 1 1 n", "P -2ab"),
  setting!(7, "P 1 1 b", "P -2b"),
  setting!(7, "P b 1 1", "P -2xb"),
  setting!(7, "P n 1 1", "P -2xbc"),
  setting!(7, "P c 1 1", "P -2xc"),
  setting!(8, "A 1 m 1", "A -2y"),
  setting!(8, "I 1 m 1", "I -2y"),
  setting!(8, "A 1 1 m", "A -2"),
  setting!(8, "B 1 1 m", "B -2"),
  setting!(8, "I 1 1 m", "I -2"),
  setting!(8, "B m 1 1", "B -2x"),
  setting!(8, "C m 1 1", "C -2x"),
  setting!(8, "I m 1 1", "I -2x"),
  setting!(9, "A 1 n 1", "A -2yac"),
  setting!(9, "I 1 a 1", "I -2ya"),
  setting!(9, "A 1 a 1", "A -2ya"),
  setting!(9, "C 1 n 1", "C -2ybc"),
  setting!(9, "I 1 c 1", "I -2yc"),
  setting!(9, "A 1 1 a", "A -2a"),
  setting!(9, "B 1 1 n", "B -2bc"),
  setting!(9, "I 1 1 b", "I -2b"),
  setting!(9, "B 1 1 b", "B -2b"),
  setting!(9, "A 1 1 n", "A -2ac"),
  setting!(9, "I 1 1 a", "I -2a"),
  setting!(9, "B b 1 1", "B -2xb"),
  setting!(9, "C n 1 1", "C -2xbc"),
  setting!(9, "I c 1 1", "I -2xc"),
  setting!(9, "C c 1 1", "C -2xc"),
  setting!(9, "B n 1 1", "B -2xbc"),
  setting!(9, "I b 1 1", "I -2xb"),
  setting!(10, "P 1 1 2/m", "-P 2"),
  setting!(10, "P 2/m 1 1", "-P 2x"),
  setting!(11, "P 1 1 21/m", "-P 2c"),
  setting!(11, "P 21/m 1 1", "-P 2xa"),
  setting!(12, "A 1 2/m 1", "-A 2y"),
  setting!(12, "I 1 2/m 1", "-I 2y"),
  setting!(12, "A 1 1 2/m", "-A 2"),
  setting!(12, "B 1 1 2/m", "-B 2"),
  setting!(12, "I 1 1 2/m", "-I 2"),
  setting!(12, "B 2/m 1 1", "-B 2x"),
  setting!(12, "C 2/m 1 1", "-C 2x"),
  setting!(12, "I 2/m 1 1", "-I 2x"),
  setting!(13, "P 1 2/n 1", "-P 2yac"),
  setting!(13, "P 1 2/a 1", "-P 2ya"),
  setting!(13, "P 1 1 2/a", "-P 2a"),
  setting!(13, "P 1 1 2/n", "-P 2ab"),
  setting!(13, "P 1 1 2/b", "-P 2b"),
  setting!(13, "P 2/b 1 1", "-P 2xb"),
  setting!(13, "P 2/n 1 1", "-P 2xbc"),
  setting!(13, "P 2/c 1 1", "-P 2xc"),
  setting!(14, "P 1 21/n 1", "-P 2yn"),
  setting!(14, "P 1 21/a 1", "-P 2yab"),
  setting!(14, "P 1 1 21/a", "-P 2ac"),
  setting!(14, "P 1 1 21/n", "-P 2n"),
  setting!(14, "P 1 1 21/b", "-P 2bc"),
  setting!(14, "P 21/b 1 1", "-P 2xab"),
  setting!(14, "P 21/n 1 1", "-P 2xn"),
  setting!(14, "P 21/c 1 1", "-P 2xac"),
  setting!(15, "A 1 2/n 1", "-A 2yac"),
  setting!(15, "I 1 2/a 1", "-I 2ya"),
  setting!(15, "A 1 2/a 1", "-A 2ya"),
  setting!(15, "C 1 2/n 1", "-C 2ybc"),
  setting!(15, "I 1 2/c 1", "-I 2yc"),
  setting!(15, "A 1 1 2/a", "-A 2a"),
  setting!(15, "B 1 1 2/n", "-B 2bc"),
  setting!(15, "I 1 1 2/b", "-I 2b"),
  setting!(15, "B 1 1 2/b", "-B 2b"),
  setting!(15, "A 1 1 2/n", "-A 2ac"),
  setting!(15, "I 1 1 2/a", "-I 2a"),
  setting!(15, "B 2/b 1 1", "-B 2xb"),
  setting!(15, "C 2/n 1 1", "-C 2xbc"),
  setting!(15, "I 2/c 1 1", "-I 2xc"),
  setting!(15, "C 2/c 1 1", "-C 2xc"),
  setting!(15, "B 2/n 1 1", "-B 2xbc"),
  setting!(15, "I 2/b 1 1", "-I 2xb"),
  // --- Orthorhombic: permuted axes ---
  setting!(17, "P 21 2 2", "P 2a 2a"),
  setting!(17, "P 2 21 2", "P 2 2b"),
  setting!(18, "P 2 21 21", "P 2bc 2"),
  setting!(18, "P 21 2 21", "P 2ac 2ac"),
  setting!(20, "A 21 2 2", "A 2a 2a"),
  setting!(20, "B 2 21 2", "B 2 2b"),
  setting!(21, "A 2 2 2", "A 2 2"),
  setting!(21, "B 2 2 2", "B 2 2"),
  setting!(25, "P 2 m m", "P -2 2"),
  setting!(25, "P m 2 m", "P -2 -2"),
  setting!(26, "P c m 21", "P 2c -2c"),
  setting!(26, "P 21 m a", "P -2a 2a"),
  setting!(26, "P 21 a m", "P -2 2a"),
  setting!(26, "P b 21 m", "P -2 -2b"),
  setting!(26, "P m 21 b", "P -2b -2"),
  setting!(27, "P 2 a a", "P -2a 2"),
  setting!(27, "P b 2 b", "P -2b -2b"),
  setting!(28, "P b m 2", "P 2 -2b"),
  setting!(28, "P 2 m b", "P -2b 2"),
  setting!(28, "P 2 c m", "P -2c 2"),
  setting!(28, "P c 2 m", "P -2c -2c"),
  setting!(28, "P m 2 a", "P -2a -2a"),
  setting!(29, "P b c 21", "P 2c -2b"),
  setting!(29, "P 21 a b", "P -2b 2a"),
  setting!(29, "P 21 c a", "P -2ac 2a"),
  setting!(29, "P c 21 b", "P -2bc -2c"),
  setting!(29, "P b 21 a", "P -2a -2ab"),
  setting!(30, "P c n 2", "P 2 -2ac"),
  setting!(30, "P 2 n a", "P -2ac 2"),
  setting!(30, "P 2 a n", "P -2ab 2"),
  setting!(30, "P b 2 n", "P -2ab -2ab"),
  setting!(30, "P n 2 b", "P -2bc -2bc"),
  setting!(31, "P n m 21", "P 2bc -2bc"),
  setting!(31, "P 21 m n", "P -2ab 2ab"),
  setting!(31, "P 21 n m", "P -2 2ac"),
  setting!(31, "P n 21 m", "P -2 -2bc"),
  setting!(31, "P m 21 n", "P -2ab -2"),
  setting!(32, "P 2 c b", "P -2bc 2"),
  setting!(32, "P c 2 a", "P -2ac -2ac"),
  setting!(33, "P b n 21", "P 2c -2ab"),
  setting!(33, "P 21 n b", "P -2bc 2a"),
  setting!(33, "P 21 c n", "P -2n 2a"),
  setting!(33, "P c 21 n", "P -2n -2ac"),
  setting!(33, "P n 21 a", "P -2ac -2n"),
  setting!(34, "P 2 n n", "P -2n 2"),
  setting!(34, "P n 2 n", "P -2n -2n"),
  setting!(35, "A 2 m m", "A -2 2"),
  setting!(35, "B m 2 m", "B -2 -2"),
  setting!(36, "C c m 21", "C 2c -2c"),
  setting!(36, "A 21 m a", "A -2a 2a"),
  setting!(36, "A 21 a m", "A -2 2a"),
  setting!(36, "B b 21 m", "B -2 -2b"),
  setting!(36, "B m 21 b", "B -2b -2"),
  setting!(37, "A 2 a a", "A -2a 2"),
  setting!(37, "B b 2 b", "B -2b -2b"),
  setting!(38, "B m m 2", "B 2 -2"),
  setting!(38, "B 2 m m", "B -2 2"),
  setting!(38, "C 2 m m", "C -2 2"),
  setting!(38, "C m 2 m", "C -2 -2"),
  setting!(38, "A m 2 m", "A -2 -2"),
  setting!(39, "B m a 2", "B 2 -2c"),
  setting!(39, "B 2 c m", "B -2c 2"),
  setting!(39, "C 2 m b", "C -2b 2"),
  setting!(39, "C m 2 a", "C -2b -2b"),
  setting!(39, "A c 2 m", "A -2c -2c"),
  setting!(40, "B b m 2", "B 2 -2b"),
  setting!(40, "B 2 m b", "B -2b 2"),
  setting!(40, "C 2 c m", "C -2c 2"),
  setting!(40, "C c 2 m", "C -2c -2c"),
  setting!(40, "A m 2 a", "A -2a -2a"),
  setting!(41, "B b a 2", "B 2 -2bc"),
  setting!(41, "B 2 c b", "B -2bc 2"),
  setting!(41, "C 2 c b", "C -2bc 2"),
  setting!(41, "C c 2 a", "C -2bc -2bc"),
  setting!(41, "A c 2 a", "A -2ac -2ac"),
  setting!(42, "F 2 m m", "F -2 2"),
  setting!(42, "F m 2 m", "F -2 -2"),
  setting!(43, "F 2 d d", "F -2d 2"),
  setting!(43, "F d 2 d", "F -2d -2d"),
  setting!(44, "I 2 m m", "I -2 2"),
  setting!(44, "I m 2 m", "I -2 -2"),
  setting!(45, "I 2 c b", "I -2a 2"),
  setting!(45, "I c 2 a", "I -2b -2b"),
  setting!(46, "I b m 2", "I 2 -2b"),
  setting!(46, "I 2 m b", "I -2b 2"),
  setting!(46, "I 2 c m", "I -2c 2"),
  setting!(46, "I c 2 m", "I -2c -2c"),
  setting!(46, "I m 2 a", "I -2a -2a"),
  setting!(48, "P n n n :1", "P 2 2 -1n"),
  setting!(49, "P m a a", "-P 2a 2"),
  setting!(49, "P b m b", "-P 2b 2b"),
  setting!(50, "P b a n :1", "P 2 2 -1ab"),
  setting!(50, "P n c b :1", "P 2 2 -1bc"),
  setting!(50, "P n c b :2", "-P 2b 2bc"),
  setting!(50, "P c n a :1", "P 2 2 -1ac"),
  setting!(50, "P c n a :2", "-P 2a 2c"),
  setting!(51, "P m m b", "-P 2b 2"),
  setting!(51, "P b m m", "-P 2 2b"),
  setting!(51, "P c m m", "-P 2c 2c"),
  setting!(51, "P m c m", "-P 2c 2"),
  setting!(51, "P m a m", "-P 2 2a"),
  setting!(52, "P n n b", "-P 2b 2n"),
  setting!(52, "P b n n", "-P 2n 2b"),
  setting!(52, "P c n n", "-P 2ab 2c"),
  setting!(52, "P n c n", "-P 2ab 2n"),
  setting!(52, "P n a n", "-P 2n 2bc"),
  setting!(53, "P n m b", "-P 2bc 2bc"),
  setting!(53, "P b m n", "-P 2ab 2ab"),
  setting!(53, "P c n m", "-P 2 2ac"),
  setting!(53, "P n c m", "-P 2 2bc"),
  setting!(53, "P m a n", "-P 2ab 2"),
  setting!(54, "P c c b", "-P 2b 2c"),
  setting!(54, "P b a a", "-P 2a 2b"),
  setting!(54, "P c a a", "-P 2ac 2c"),
  setting!(54, "P b c b", "-P 2bc 2b"),
  setting!(54, "P b a b", "-P 2b 2ab"),
  setting!(55, "P m c b", "-P 2bc 2"),
  setting!(55, "P c m a", "-P 2ac 2ac"),
  setting!(56, "P n a a", "-P 2ac 2bc"),
  setting!(56, "P b n b", "-P 2bc 2ab"),
  setting!(57, "P c a m", "-P 2c 2ac"),
  setting!(57, "P m c a", "-P 2ac 2a"),
  setting!(57, "P m a b", "-P 2b 2a"),
  setting!(57, "P b m a", "-P 2a 2ab"),
  setting!(57, "P c m b", "-P 2bc 2c"),
  setting!(58, "P m n n", "-P 2n 2"),
  setting!(58, "P n m n", "-P 2n 2n"),
  setting!(59, "P m m n :1", "P 2 2ab -1ab"),
  setting!(59, "P n m m :1", "P 2bc 2 -1bc"),
  setting!(59, "P n m m :2", "-P 2c 2bc"),
  setting!(59, "P m n m :1", "P 2ac 2ac -1ac"),
  setting!(59, "P m n m :2", "-P 2c 2a"),
  setting!(60, "P c a n", "-P 2n 2c"),
  setting!(60, "P n c a", "-P 2a 2n"),
  setting!(60, "P n a b", "-P 2bc 2n"),
  setting!(60, "P b n a", "-P 2ac 2b"),
  setting!(60, "P c n b", "-P 2b 2ac"),
  setting!(61, "P c a b", "-P 2bc 2ac"),
  setting!(62, "P m n b", "-P 2bc 2a"),
  setting!(62, "P b n m", "-P 2c 2ab"),
  setting!(62, "P c m n", "-P 2n 2ac"),
  setting!(62, "P m c n", "-P 2n 2a"),
  setting!(62, "P n a m", "-P 2c 2n"),
  setting!(63, "C c m m", "-C 2c 2c"),
  setting!(63, "A m m a", "-A 2a 2a"),
  setting!(63, "A m a m", "-A 2 2a"),
  setting!(63, "B b m m", "-B 2 2b"),
  setting!(63, "B m m b", "-B 2b 2"),
  setting!(64, "C c m b", "-C 2bc 2bc"),
  setting!(64, "A b m a", "-A 2ac 2ac"),
  setting!(64, "A c a m", "-A 2 2ac"),
  setting!(64, "B b c m", "-B 2 2bc"),
  setting!(64, "B m a b", "-B 2bc 2"),
  setting!(65, "A m m m", "-A 2 2"),
  setting!(65, "B m m m", "-B 2 2"),
  setting!(66, "A m a a", "-A 2a 2"),
  setting!(66, "B b m b", "-B 2b 2b"),
  setting!(67, "C m m b", "-C 2b 2b"),
  setting!(67, "A b m m", "-A 2c 2c"),
  setting!(67, "A c m m", "-A 2 2c"),
  setting!(67, "B m c m", "-B 2 2c"),
  setting!(67, "B m a m", "-B 2c 2"),
  setting!(68, "C c c a :1", "C 2 2 -1bc"),
  setting!(68, "C c c b :1", "C 2 2 -1bc"),
  setting!(68, "C c c b :2", "-C 2b 2c"),
  setting!(68, "A b a a :1", "A 2 2 -1ac"),
  setting!(68, "A b a a :2", "-A 2a 2c"),
  setting!(68, "A c a a :1", "A 2 2 -1ac"),
  setting!(68, "A c a a :2", "-A 2ac 2c"),
  setting!(68, "B b c b :1", "B 2 2 -1bc"),
  setting!(68, "B b c b :2", "-B 2bc 2b"),
  setting!(68, "B b a b :1", "B 2 2 -1bc"),
  setting!(68, "B b a b :2", "-B 2b 2bc"),
  setting!(70, "F d d d :1", "F 2 2 -1d"),
  setting!(72, "I m c b", "-I 2a 2"),
  setting!(72, "I c m a", "-I 2b 2b"),
  setting!(73, "I c a b", "-I 2a 2b"),
  setting!(74, "I m m b", "-I 2a 2a"),
  setting!(74, "I b m m", "-I 2c 2c"),
  setting!(74, "I c m m", "-I 2 2b"),
  setting!(74, "I m c m", "-I 2 2a"),
  setting!(74, "I m a m", "-I 2c 2"),
  // --- Tetragonal: origin choice 1 ---
  setting!(85, "P 4/n :1", "P 4ab -1ab"),
  setting!(86, "P 42/n :1", "P 4n -1n"),
  setting!(88, "I 41/a :1", "I 4bw -1bw"),
  setting!(125, "P 4/n b m :1", "P 4 2 -1ab"),
  setting!(126, "P 4/n n c :1", "P 4 2 -1n"),
  setting!(129, "P 4/n m m :1", "P 4ab 2ab -1ab"),
  setting!(130, "P 4/n c c :1", "P 4ab 2n -1ab"),
  setting!(133, "P 42/n b c :1", "P 4n 2c -1n"),
  setting!(134, "P 42/n n m :1", "P 4n 2 -1n"),
  setting!(137, "P 42/n m c :1", "P 4n 2n -1n"),
  setting!(138, "P 42/n c m :1", "P 4n 2ab -1n"),
  setting!(141, "I 41/a m d :1", "I 4bw 2bw -1bw"),
  setting!(142, "I 41/a c d :1", "I 4bw 2aw -1bw"),
  // --- Trigonal: rhombohedral axes ---
  setting!(146, "R 3 :R", "P 3*"),
  setting!(148, "R -3 :R", "-P 3*"),
  setting!(155, "R 3 2 :R", "P 3* 2"),
  setting!(160, "R 3 m :R", "P 3* -2"),
  setting!(161, "R 3 c :R", "P 3* -2n"),
  setting!(166, "R -3 m :R", "-P 3* 2"),
  setting!(167, "R -3 c :R", "-P 3* 2n"),
  // --- Cubic: origin choice 1 ---
  setting!(201, "P n -3 :1", "P 2 2 3 -1n"),
  setting!(203, "F d -3 :1", "F 2 2 3 -1d"),
  setting!(222, "P n -3 n :1", "P 4 2 3 -1n"),
  setting!(224, "P n -3 m :1", "P 4n 2 3 -1n"),
  setting!(227, "F d -3 m :1", "F 4d 2 3 -1d"),
  setting!(228, "F d -3 c :1", "F 4d 2 3 -1cd"),
];
