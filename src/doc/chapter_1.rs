/*!
# Programming the Machine

Every character of a HackVM program is one instruction. Characters that
are not instructions, such as spaces and newlines, are skipped, so you
may lay out code however you like.

## Numbers

The digits `0` through `9` each push their own value. There is no way to
write `42` directly. Build it with arithmetic instead.

```text
67*p
```

Arithmetic pops two values. The value pushed first is on the left, so
`43-` is four minus three. Division truncates toward zero.

```text
'+' '-' '*' '/'   arithmetic
':'               compare: -1, 0 or 1
```

## Output

`p` prints a number with no separators. `P` prints one character, using
the low eight bits of the value. This prints `Hi` and a newline.

```text
89*P 753**P 25*P
```

## Memory

There are 16384 cells of memory, all starting at zero. `>` pops an
address and then a value, and stores the value. `<` pops an address
and pushes the cell's value. Any other address stops the program.

```text
67* 55*4* >     store 42 at address 100
55*4* <p        prints 42
```

## Jumps

`g` pops an offset and adds it to the program counter. `?` pops an
offset and then a value, and jumps only when the value is zero. The
offset is counted from the instruction just after `g` or `?`.

This counts down from three, printing `321`.

```text
30^p1-0^6?035*-g
```

## Subroutines

`c` pops an address, remembers where it was and jumps. `$` goes back to
just after the `c`. Addresses are absolute positions in the program text,
starting at zero.

```text
4cp!7$
```

## The stack

`d` drops the top value. `^` pops a depth and pushes a copy of the value
at that depth, where the top is depth zero. `v` pops a depth and moves
that value to the top. `0^` duplicates and `1v` swaps.

## Stopping

`!` ends the program. A program also ends when it runs out of
instructions. In interactive mode running out of instructions just
waits for the next line.

Popping an empty stack, returning without a call, dividing by zero, or
using a bad address or depth stops the program with an error.

*/
